//! Fake board for driver tests
//!
//! Records every GPIO operation and simulates the thermocouple converter:
//! a falling edge on chip-select latches the next queued word, the data
//! line presents the current bit while the clock is high, and each falling
//! clock edge shifts to the next bit.

use std::collections::VecDeque;

use toaster_core::config::PinAssignment;
use toaster_core::traits::RAW_WORD_BITS;
use toaster_hal::{Gpio, Level, PinMode};

/// One recorded GPIO operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Mode(u8, PinMode),
    Write(u8, Level),
    Read(u8),
    Delay(u32),
    Servo(u8, u16),
}

/// Word being shifted out: the latched value and bits already clocked
#[derive(Debug, Clone, Copy)]
struct Shift {
    word: u16,
    clocked: u8,
}

pub struct FakeBoard {
    pins: PinAssignment,
    ops: Vec<Op>,
    words: VecDeque<u16>,
    shift: Option<Shift>,
    clock_high: bool,
}

impl FakeBoard {
    pub fn new(pins: PinAssignment) -> Self {
        Self {
            pins,
            ops: Vec::new(),
            words: VecDeque::new(),
            shift: None,
            clock_high: false,
        }
    }

    /// Queue a raw word for the next conversion
    pub fn queue_word(&mut self, raw: u16) {
        self.words.push_back(raw);
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Pulse widths sent to the servo pin, in order
    pub fn servo_pulses(&self) -> Vec<u16> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Op::Servo(pin, width) if pin == self.pins.servo => Some(width),
                _ => None,
            })
            .collect()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Op::Delay(us) => Some(us),
                _ => None,
            })
            .collect()
    }
}

impl Gpio for FakeBoard {
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode) {
        self.ops.push(Op::Mode(pin, mode));
    }

    fn write(&mut self, pin: u8, level: Level) {
        self.ops.push(Op::Write(pin, level));

        if pin == self.pins.chip_select {
            self.shift = match level {
                Level::Low => Some(Shift {
                    word: self.words.pop_front().unwrap_or(0),
                    clocked: 0,
                }),
                Level::High => None,
            };
        } else if pin == self.pins.clock {
            let falling = self.clock_high && !level.is_high();
            self.clock_high = level.is_high();
            if falling {
                if let Some(shift) = self.shift.as_mut() {
                    shift.clocked += 1;
                }
            }
        }
    }

    fn read(&mut self, pin: u8) -> Level {
        self.ops.push(Op::Read(pin));

        if pin != self.pins.data || !self.clock_high {
            return Level::Low;
        }
        match self.shift {
            Some(Shift { word, clocked }) if clocked < RAW_WORD_BITS => {
                let bit = RAW_WORD_BITS - 1 - clocked;
                Level::from((word >> bit) & 1 == 1)
            }
            _ => Level::Low,
        }
    }

    fn delay_us(&mut self, us: u32) {
        self.ops.push(Op::Delay(us));
    }

    fn set_servo(&mut self, pin: u8, pulse_width_us: u16) {
        self.ops.push(Op::Servo(pin, pulse_width_us));
    }
}
