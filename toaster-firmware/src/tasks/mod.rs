//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod control;
pub mod servo;
pub mod status;

pub use buttons::{button_task, ButtonPress, ButtonRole};
pub use control::{control_task, Toaster};
pub use servo::servo_task;
pub use status::status_task;
