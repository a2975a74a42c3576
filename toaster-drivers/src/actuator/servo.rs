//! Servo carriage actuator
//!
//! Drives the bread carriage servo with fixed pulse widths: one for the
//! neutral (released) position and one for the engaged (held down) position.

use toaster_core::config::{ServoPulses, ToasterConfig};
use toaster_core::traits::{Actuator, ServoPosition};
use toaster_hal::{Gpio, PinMode};

/// Servo output on a single GPIO pin
pub struct ServoActuator<G> {
    gpio: G,
    pin: u8,
    pulses: ServoPulses,
    position: ServoPosition,
}

impl<G: Gpio> ServoActuator<G> {
    /// Create a servo actuator from the configured pin and pulse widths
    ///
    /// The pin is switched to output and the servo is parked at neutral.
    pub fn new(gpio: G, config: &ToasterConfig) -> Self {
        let mut servo = Self {
            gpio,
            pin: config.pins.servo,
            pulses: config.servo,
            position: ServoPosition::Neutral,
        };
        servo.gpio.set_pin_mode(servo.pin, PinMode::Output);
        // Ensure the carriage starts released
        servo.set_position(ServoPosition::Neutral);
        servo
    }

    /// Pulse width for a position
    pub fn pulse_width(&self, position: ServoPosition) -> u16 {
        match position {
            ServoPosition::Neutral => self.pulses.off_us,
            ServoPosition::Engaged => self.pulses.on_us,
        }
    }

    /// Last commanded position
    pub fn position(&self) -> ServoPosition {
        self.position
    }

    /// Get access to the underlying GPIO
    pub fn gpio(&self) -> &G {
        &self.gpio
    }
}

impl<G: Gpio> Actuator for ServoActuator<G> {
    fn set_position(&mut self, position: ServoPosition) {
        self.position = position;
        let width = self.pulse_width(position);
        self.gpio.set_servo(self.pin, width);
    }
}
