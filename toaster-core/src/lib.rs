//! Board-agnostic core logic for the toaster controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor and actuator traits plus the [`traits::Sample`] type
//! - Phase state machine (idle, toasting, done)
//! - Threshold input reconciliation and toast session timing
//! - The once-per-second sampling gate and the host control loop
//! - Configuration type definitions and parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod state;
pub mod traits;
