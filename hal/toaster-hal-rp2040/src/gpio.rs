//! Pin-addressed GPIO over RP2040 `Flex` pins

use embassy_rp::gpio::{AnyPin, Flex, Level as RpLevel};
use embassy_rp::Peri;
use embassy_time::Delay;
use embedded_hal::delay::DelayNs;
use heapless::Vec;
use toaster_hal::{Gpio, Level, PinMode};

use crate::pins::PinError;
use crate::servo::ServoPulse;

/// Maximum number of pins one [`Rp2040Gpio`] can own
pub const MAX_PINS: usize = 4;

/// GPIO controller owning a handful of pins by number
///
/// Operations on pins it does not own are ignored. Delays busy-wait on the
/// embassy time driver.
pub struct Rp2040Gpio<'d> {
    pins: Vec<(u8, Flex<'d>), MAX_PINS>,
    servo: Option<(u8, &'d ServoPulse)>,
    delay: Delay,
}

impl<'d> Rp2040Gpio<'d> {
    /// Create a controller that owns no pins
    pub fn new() -> Self {
        Self {
            pins: Vec::new(),
            servo: None,
            delay: Delay,
        }
    }

    /// Hand a pin to this controller under its GPIO number
    ///
    /// The pin starts as a floating input.
    pub fn add_pin(&mut self, number: u8, pin: Peri<'d, AnyPin>) -> Result<(), PinError> {
        let mut flex = Flex::new(pin);
        flex.set_as_input();
        self.pins
            .push((number, flex))
            .map_err(|_| PinError::TooManyPins)
    }

    /// Route servo commands for `number` to a servo output
    pub fn attach_servo(&mut self, number: u8, pulse: &'d ServoPulse) {
        self.servo = Some((number, pulse));
    }

    fn flex(&mut self, number: u8) -> Option<&mut Flex<'d>> {
        self.pins
            .iter_mut()
            .find(|(n, _)| *n == number)
            .map(|(_, flex)| flex)
    }
}

impl Default for Rp2040Gpio<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpio for Rp2040Gpio<'_> {
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode) {
        if let Some(flex) = self.flex(pin) {
            match mode {
                PinMode::Input => flex.set_as_input(),
                PinMode::Output => flex.set_as_output(),
            }
        }
    }

    fn write(&mut self, pin: u8, level: Level) {
        if let Some(flex) = self.flex(pin) {
            flex.set_level(match level {
                Level::Low => RpLevel::Low,
                Level::High => RpLevel::High,
            });
        }
    }

    fn read(&mut self, pin: u8) -> Level {
        match self.flex(pin) {
            Some(flex) => Level::from(flex.is_high()),
            None => Level::Low,
        }
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn set_servo(&mut self, pin: u8, pulse_width_us: u16) {
        match self.servo {
            Some((number, pulse)) if number == pin => pulse.set(pulse_width_us),
            _ => {}
        }
    }
}
