//! Actuator implementations

pub mod servo;

pub use servo::ServoActuator;
