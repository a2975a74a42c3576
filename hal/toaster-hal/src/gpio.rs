//! GPIO abstractions
//!
//! A pin-addressed GPIO interface in the style of the Raspberry Pi
//! `pigpio` library: pins are plain numbers, and the same handle provides
//! blocking microsecond delays and hardware servo pulses.
//!
//! Every primitive is infallible. Pin assignment is configuration; this
//! trait only moves levels and pulses.

/// Logic level of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if this is logic 1
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// Bit value of the level (0 or 1)
    pub fn bit(self) -> u16 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Digital input (high impedance)
    Input,
    /// Push-pull digital output
    Output,
}

/// Pin-addressed GPIO controller
///
/// Implementations own whatever pins they were handed at board setup and
/// address them by number. Writing to or reading from a pin the
/// implementation does not own should be ignored (reads return
/// [`Level::Low`]).
pub trait Gpio {
    /// Configure the direction of a pin
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode);

    /// Drive an output pin to a level
    fn write(&mut self, pin: u8, level: Level);

    /// Sample the current level of a pin
    fn read(&mut self, pin: u8) -> Level;

    /// Busy-wait for the given number of microseconds
    ///
    /// This blocks the calling thread; it is used for protocol settle
    /// times that are far shorter than a scheduler tick.
    fn delay_us(&mut self, us: u32);

    /// Emit a continuous servo pulse train on a pin
    ///
    /// `pulse_width_us` is the high time of each 50 Hz frame, typically
    /// 500-2500 µs. A width of 0 stops the pulse train.
    fn set_servo(&mut self, pin: u8, pulse_width_us: u16);
}

impl<T: Gpio + ?Sized> Gpio for &mut T {
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode) {
        (**self).set_pin_mode(pin, mode);
    }

    fn write(&mut self, pin: u8, level: Level) {
        (**self).write(pin, level);
    }

    fn read(&mut self, pin: u8) -> Level {
        (**self).read(pin)
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }

    fn set_servo(&mut self, pin: u8, pulse_width_us: u16) {
        (**self).set_servo(pin, pulse_width_us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
    }

    #[test]
    fn test_level_bit() {
        assert_eq!(Level::High.bit(), 1);
        assert_eq!(Level::Low.bit(), 0);
        assert!(Level::High.is_high());
        assert!(!Level::Low.is_high());
    }
}
