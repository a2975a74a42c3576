//! Toast control
//!
//! The threshold trigger and everything it needs: operator input
//! reconciliation, session timing, the sampling gate and the host loop
//! that ties sensor, controller and clock together.

pub mod gate;
pub mod intent;
pub mod runner;
pub mod session;
pub mod threshold;
pub mod toast;

pub use gate::SampleGate;
pub use intent::{Intent, Status};
pub use runner::ControlLoop;
pub use session::ToastSession;
pub use threshold::ThresholdInput;
pub use toast::ToastController;
