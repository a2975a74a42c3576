//! Operator button tasks
//!
//! One task instance per button. The start button distinguishes a click
//! (start toasting) from a long press (reset after a finished toast). The
//! threshold buttons report a press immediately.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration, Timer};

use crate::channels::BUTTON_CHANNEL;

/// Debounce settle time
const DEBOUNCE_MS: u64 = 20;

/// Hold time that turns a click into a long press
const LONG_PRESS_MS: u64 = 500;

/// What a button is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum ButtonRole {
    /// Start on click, reset on long press
    StartReset,
    /// Raise the threshold
    Up,
    /// Lower the threshold
    Down,
}

/// Debounced button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum ButtonPress {
    Click,
    LongPress,
    Up,
    Down,
}

/// Watch one active-low button
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(mut btn: Input<'static>, role: ButtonRole) {
    info!("Button task started ({})", role);

    loop {
        btn.wait_for_falling_edge().await;

        // Debounce
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
        if !btn.is_low() {
            continue;
        }

        let press = match role {
            ButtonRole::Up => ButtonPress::Up,
            ButtonRole::Down => ButtonPress::Down,
            ButtonRole::StartReset => {
                let released =
                    with_timeout(Duration::from_millis(LONG_PRESS_MS), btn.wait_for_rising_edge())
                        .await;
                match released {
                    Ok(()) => ButtonPress::Click,
                    Err(_) => ButtonPress::LongPress,
                }
            }
        };

        debug!("Button: {}", press);
        BUTTON_CHANNEL.send(press).await;

        if btn.is_low() {
            btn.wait_for_rising_edge().await;
        }
    }
}
