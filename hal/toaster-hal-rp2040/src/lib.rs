//! RP2040 board support for the toaster controller
//!
//! This crate provides RP2040-specific implementations of the shared
//! `toaster-hal` traits:
//!
//! - Pin bank for taking GPIO pins by configured number
//! - Pin-addressed [`Rp2040Gpio`] over `Flex` pins
//! - Software-timed 50 Hz servo output
//! - [`EmbassyClock`] on the embassy time driver

#![no_std]

pub mod clock;
pub mod gpio;
pub mod pins;
pub mod servo;

pub use clock::EmbassyClock;
pub use gpio::Rp2040Gpio;
pub use pins::{PinBank, PinError};
pub use servo::{ServoOutput, ServoPulse};
