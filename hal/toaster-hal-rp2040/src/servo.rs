//! Software-timed servo output
//!
//! Hardware PWM slices are bound to pins at compile time, but the servo pin
//! is configured at boot. Instead, a task drives the servo pin directly:
//! one pulse every 20 ms, with the high phase busy-waited for pulse accuracy.
//!
//! [`ServoPulse`] is the handoff between the controller side (which writes
//! the wanted width through [`Rp2040Gpio`](crate::Rp2040Gpio)) and the
//! [`ServoOutput`] task.

use core::sync::atomic::{AtomicU16, Ordering};

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;
use embassy_time::{block_for, Duration, Ticker};

/// Servo frame period
pub const SERVO_PERIOD_US: u64 = 20_000;

/// Pulse width shared with the servo task; zero means no pulses
pub struct ServoPulse {
    width_us: AtomicU16,
}

impl ServoPulse {
    /// Create a pulse holder with no pulse set
    pub const fn new() -> Self {
        Self {
            width_us: AtomicU16::new(0),
        }
    }

    /// Set the pulse width for the following frames
    pub fn set(&self, width_us: u16) {
        self.width_us.store(width_us, Ordering::Relaxed);
    }

    /// Current pulse width
    pub fn width_us(&self) -> u16 {
        self.width_us.load(Ordering::Relaxed)
    }
}

impl Default for ServoPulse {
    fn default() -> Self {
        Self::new()
    }
}

/// Servo signal generator
pub struct ServoOutput<'d> {
    pin: Output<'d>,
    pulse: &'d ServoPulse,
}

impl<'d> ServoOutput<'d> {
    /// Drive `pin` from `pulse`; the pin starts low
    pub fn new(pin: Peri<'d, AnyPin>, pulse: &'d ServoPulse) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
            pulse,
        }
    }

    /// Emit one pulse per frame, forever
    pub async fn run(&mut self) -> ! {
        let mut ticker = Ticker::every(Duration::from_micros(SERVO_PERIOD_US));
        loop {
            let width = self.pulse.width_us();
            if width > 0 {
                self.pin.set_high();
                block_for(Duration::from_micros(width as u64));
                self.pin.set_low();
            }
            ticker.next().await;
        }
    }
}
