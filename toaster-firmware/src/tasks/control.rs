//! Control task
//!
//! Owns the control loop. Ticks it every [`TICK_INTERVAL_MS`] so the
//! once-per-second sample lands promptly after each second boundary, and
//! translates button presses into operator intents in between.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use toaster_core::control::{ControlLoop, Intent, Status};
use toaster_drivers::{ServoActuator, ThermocoupleReader};
use toaster_hal_rp2040::{EmbassyClock, Rp2040Gpio};

use crate::channels::{BUTTON_CHANNEL, STATUS};
use crate::tasks::ButtonPress;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 20;

/// Threshold change per up/down press, in °C
pub const THRESHOLD_STEP_C: i16 = 5;

/// The control loop as wired on the board
pub type Toaster = ControlLoop<
    ThermocoupleReader<Rp2040Gpio<'static>>,
    ServoActuator<Rp2040Gpio<'static>>,
    EmbassyClock,
>;

#[embassy_executor::task]
pub async fn control_task(mut toaster: Toaster) {
    info!("Control task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let mut last_status: Option<Status> = None;

    loop {
        match select(ticker.next(), BUTTON_CHANNEL.receive()).await {
            Either::First(()) => {
                if let Some(sample) = toaster.tick() {
                    debug!("Sample: {}C", sample.celsius);
                }
            }
            Either::Second(press) => {
                let intent = intent_for(press, toaster.status().threshold);
                debug!("Intent: {}", intent);
                toaster.handle(intent);
            }
        }

        let status = toaster.status();
        if last_status != Some(status) {
            STATUS.signal(status);
            last_status = Some(status);
        }
    }
}

/// Map a button press to an operator intent
///
/// Threshold steps are clamped by the controller.
fn intent_for(press: ButtonPress, threshold: i16) -> Intent {
    match press {
        ButtonPress::Click => Intent::Start,
        ButtonPress::LongPress => Intent::Reset,
        ButtonPress::Up => Intent::SetThreshold(threshold.saturating_add(THRESHOLD_STEP_C)),
        ButtonPress::Down => Intent::SetThreshold(threshold.saturating_sub(THRESHOLD_STEP_C)),
    }
}
