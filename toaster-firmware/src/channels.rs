//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use toaster_core::control::Status;

use crate::tasks::ButtonPress;

/// Channel capacity for button presses
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Debounced button presses, consumed by the control task
pub static BUTTON_CHANNEL: Channel<CriticalSectionRawMutex, ButtonPress, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Latest presentation status (updated by the control task when it changes)
pub static STATUS: Signal<CriticalSectionRawMutex, Status> = Signal::new();
