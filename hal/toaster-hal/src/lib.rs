//! Toaster Hardware Abstraction Layer
//!
//! This crate defines the narrow hardware interfaces the toaster control
//! loop talks to. Chip-specific crates implement them; the core logic and
//! drivers only ever see these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (toaster-firmware, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  toaster-core / toaster-drivers         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  toaster-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ toaster-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::Gpio`] - Pin-addressed digital I/O, blocking delays and servo pulses
//! - [`clock::Clock`] - Monotonic millisecond time source

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use gpio::{Gpio, Level, PinMode};
