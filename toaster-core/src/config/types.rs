//! Configuration type definitions
//!
//! These types hold the static configuration of one toaster build: pin
//! assignment, sensor timing, servo pulse widths and the threshold range.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shortest servo pulse accepted (µs)
pub const SERVO_PULSE_MIN_US: u16 = 500;

/// Longest servo pulse accepted (µs)
pub const SERVO_PULSE_MAX_US: u16 = 2500;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Low temperature bound is above the high bound
    InvertedBounds,
    /// Initial threshold lies outside the temperature bounds
    ThresholdOutOfBounds,
    /// The same pin is assigned to two functions
    DuplicatePin(u8),
    /// Servo pulse width outside the servo range
    ServoPulseOutOfRange(u16),
    /// Settle time of zero would violate the converter timing
    ZeroSettleTime,
    /// Pin number beyond the board's last GPIO
    PinOutOfRange(u8),
    /// Pin is wired to something else on the board
    ReservedPin(u8),
}

/// Pin assignment for the sensor bus and the servo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinAssignment {
    /// Servo pulse output
    pub servo: u8,
    /// Converter chip-select (active low)
    pub chip_select: u8,
    /// Converter serial clock
    pub clock: u8,
    /// Converter serial data output
    pub data: u8,
}

impl PinAssignment {
    /// Default wiring
    pub const DEFAULT: Self = Self {
        servo: 18,
        chip_select: 10,
        clock: 11,
        data: 9,
    };

    /// All assigned pins
    pub fn all(&self) -> [u8; 4] {
        [self.servo, self.chip_select, self.clock, self.data]
    }
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Servo pulse widths for the two carriage positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServoPulses {
    /// Pulse width for the neutral (carriage up) position (µs)
    pub off_us: u16,
    /// Pulse width for the engaged (carriage down) position (µs)
    pub on_us: u16,
}

impl ServoPulses {
    /// Default pulse widths
    pub const DEFAULT: Self = Self {
        off_us: 700,
        on_us: 2000,
    };
}

impl Default for ServoPulses {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Closed range of accepted cook-to temperatures (°C)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TempBounds {
    /// Lowest accepted threshold
    pub low: i16,
    /// Highest accepted threshold
    pub high: i16,
}

impl TempBounds {
    /// Default range
    pub const DEFAULT: Self = Self {
        low: 50,
        high: 150,
    };

    /// Create a new range
    pub const fn new(low: i16, high: i16) -> Self {
        Self { low, high }
    }

    /// Clamp a value into the range
    pub fn clamp(&self, value: i16) -> i16 {
        value.max(self.low).min(self.high)
    }

    /// Check if a value lies inside the range
    pub fn contains(&self, value: i16) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl Default for TempBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete toaster configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToasterConfig {
    /// Pin assignment
    pub pins: PinAssignment,
    /// Settle delay around every converter clock edge (µs)
    pub settle_time_us: u32,
    /// Servo pulse widths
    pub servo: ServoPulses,
    /// Threshold range
    pub bounds: TempBounds,
    /// Threshold in force at power-up (°C)
    pub initial_threshold: i16,
}

impl ToasterConfig {
    /// Default configuration
    pub const DEFAULT: Self = Self {
        pins: PinAssignment::DEFAULT,
        settle_time_us: 100,
        servo: ServoPulses::DEFAULT,
        bounds: TempBounds::DEFAULT,
        initial_threshold: 80,
    };

    /// Check the configuration for consistency
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bounds.low > self.bounds.high {
            return Err(ConfigError::InvertedBounds);
        }

        if !self.bounds.contains(self.initial_threshold) {
            return Err(ConfigError::ThresholdOutOfBounds);
        }

        let pins = self.pins.all();
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(ConfigError::DuplicatePin(*pin));
            }
        }

        for pulse in [self.servo.off_us, self.servo.on_us] {
            if !(SERVO_PULSE_MIN_US..=SERVO_PULSE_MAX_US).contains(&pulse) {
                return Err(ConfigError::ServoPulseOutOfRange(pulse));
            }
        }

        if self.settle_time_us == 0 {
            return Err(ConfigError::ZeroSettleTime);
        }

        Ok(())
    }

    /// Check the pin assignment against a board
    ///
    /// `max_gpio` is the highest usable pin number; `reserved` lists pins
    /// the board wires to other functions.
    pub fn check_board(&self, max_gpio: u8, reserved: &[u8]) -> Result<(), ConfigError> {
        for pin in self.pins.all() {
            if pin > max_gpio {
                return Err(ConfigError::PinOutOfRange(pin));
            }
            if reserved.contains(&pin) {
                return Err(ConfigError::ReservedPin(pin));
            }
        }
        Ok(())
    }

    /// Worst-case blocking time of one sensor read (µs)
    ///
    /// One settle after chip-select plus two per data bit.
    pub fn read_duration_us(&self) -> u32 {
        let settles = 2 * u32::from(crate::traits::RAW_WORD_BITS) + 1;
        self.settle_time_us.saturating_mul(settles)
    }
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
