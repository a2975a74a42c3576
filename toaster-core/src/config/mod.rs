//! Configuration management
//!
//! Configuration types and a small parser for the `key = value`
//! configuration file embedded in the firmware.

mod parse;
mod types;

pub use parse::*;
pub use types::*;
