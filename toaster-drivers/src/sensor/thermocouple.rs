//! Thermocouple converter over a bit-banged 3-wire bus
//!
//! The converter shifts out a 12-bit conversion result MSB first while
//! chip-select is held low. Each bit is sampled with the clock high, and
//! every edge is followed by a settle delay.
//!
//! ```text
//!   CS  ‾‾\______________________________________/‾‾
//!   CLK ____/‾‾\__/‾‾\__ ... __/‾‾\______________
//!   DO      b11    b10          b0
//! ```
//!
//! Conversion is `raw * 0.5` °C truncated toward zero, see
//! [`Sample::from_raw`].

use toaster_core::config::ToasterConfig;
use toaster_core::traits::{Sample, TemperatureSensor, RAW_WORD_BITS};
use toaster_hal::{Gpio, Level, PinMode};

/// Bus pins used by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorPins {
    /// Chip select, active low
    pub chip_select: u8,
    /// Serial clock
    pub clock: u8,
    /// Serial data from the converter
    pub data: u8,
}

/// Bit-banged thermocouple reader
pub struct ThermocoupleReader<G> {
    gpio: G,
    pins: SensorPins,
    settle_us: u32,
}

impl<G: Gpio> ThermocoupleReader<G> {
    /// Create a reader using the sensor pins and settle time from `config`
    ///
    /// Call [`init`](Self::init) once before the first read.
    pub fn new(gpio: G, config: &ToasterConfig) -> Self {
        Self {
            gpio,
            pins: SensorPins {
                chip_select: config.pins.chip_select,
                clock: config.pins.clock,
                data: config.pins.data,
            },
            settle_us: config.settle_time_us,
        }
    }

    /// Configure pin directions and park the bus idle
    ///
    /// Chip-select and clock are outputs, data is an input. The bus idles
    /// with chip-select high and the clock low.
    pub fn init(&mut self) {
        self.gpio.set_pin_mode(self.pins.chip_select, PinMode::Output);
        self.gpio.set_pin_mode(self.pins.clock, PinMode::Output);
        self.gpio.set_pin_mode(self.pins.data, PinMode::Input);
        self.gpio.write(self.pins.chip_select, Level::High);
        self.gpio.write(self.pins.clock, Level::Low);
    }

    /// Run one bus transaction and return the 12-bit raw word
    ///
    /// Blocks for `25 * settle_us`.
    pub fn read_raw(&mut self) -> u16 {
        let settle = self.settle_us;
        let mut raw = 0u16;

        self.gpio.write(self.pins.chip_select, Level::Low);
        self.gpio.delay_us(settle);

        for bit in (0..RAW_WORD_BITS).rev() {
            self.gpio.write(self.pins.clock, Level::High);
            self.gpio.delay_us(settle);
            raw |= self.gpio.read(self.pins.data).bit() << bit;
            self.gpio.write(self.pins.clock, Level::Low);
            self.gpio.delay_us(settle);
        }

        self.gpio.write(self.pins.chip_select, Level::High);
        raw
    }

    /// Bus pins in use
    pub fn pins(&self) -> SensorPins {
        self.pins
    }

    /// Get access to the underlying GPIO
    pub fn gpio(&self) -> &G {
        &self.gpio
    }
}

impl<G: Gpio> TemperatureSensor for ThermocoupleReader<G> {
    fn read(&mut self) -> Sample {
        let sample = Sample::from_raw(self.read_raw());
        #[cfg(feature = "defmt")]
        defmt::trace!("thermocouple: {} C", sample.celsius);
        sample
    }
}
