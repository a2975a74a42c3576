//! Actuator trait for the bread carriage servo

/// Commanded position of the carriage servo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoPosition {
    /// Resting position, carriage up (servo "off")
    Neutral,
    /// Carriage lowered into the toaster (servo "on")
    Engaged,
}

/// Trait for the toasting actuator
///
/// Commands are last-write-wins with no acknowledgement. The device is not
/// assumed to be idempotent, so callers must not repeat a command.
pub trait Actuator {
    /// Command the actuator to a position
    fn set_position(&mut self, position: ServoPosition);
}

impl<T: Actuator + ?Sized> Actuator for &mut T {
    fn set_position(&mut self, position: ServoPosition) {
        (**self).set_position(position);
    }
}
