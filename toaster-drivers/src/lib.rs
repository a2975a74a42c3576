//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in toaster-core, built on the pin-addressed [`toaster_hal::Gpio`]:
//!
//! - Thermocouple converter read over a bit-banged 3-wire bus
//! - Servo carriage actuator

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuator;
pub mod sensor;

pub use actuator::ServoActuator;
pub use sensor::ThermocoupleReader;

#[cfg(test)]
mod scenario;
#[cfg(test)]
mod testing;
