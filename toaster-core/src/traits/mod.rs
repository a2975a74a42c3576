//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic
//! and the concrete sensor and actuator drivers.

pub mod actuator;
pub mod sensor;

pub use actuator::{Actuator, ServoPosition};
pub use sensor::{Sample, TemperatureSensor, RAW_WORD_BITS, RAW_WORD_MASK};
