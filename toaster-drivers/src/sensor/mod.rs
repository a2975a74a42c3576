//! Temperature sensor implementations

pub mod thermocouple;

pub use thermocouple::{SensorPins, ThermocoupleReader};
