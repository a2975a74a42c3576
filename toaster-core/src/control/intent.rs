//! Presentation interface
//!
//! The presentation layer reads a [`Status`] snapshot every frame and
//! forwards operator [`Intent`]s. Nothing else couples the two.

use crate::state::Phase;

/// Operator intents forwarded by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Intent {
    /// Commit a threshold value directly
    SetThreshold(i16),
    /// Slider dragged to a value (not committed)
    SliderMoved(i16),
    /// Slider released; commit its value
    SliderReleased,
    /// Text entry changed (not committed)
    TextEdited(i16),
    /// Text entry lost focus or was confirmed; commit its value
    TextCommitted,
    /// Start toasting
    Start,
    /// Clear a finished session
    Reset,
}

impl Intent {
    /// Check if this intent touches the threshold
    pub fn is_threshold_input(&self) -> bool {
        !matches!(self, Intent::Start | Intent::Reset)
    }
}

/// Observable controller state for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    /// Latest sample (°C), `None` before the first read
    pub current_temperature: Option<i16>,
    /// Toasting duration in whole seconds (frozen once done)
    pub elapsed_seconds: u32,
    /// Current phase
    pub phase: Phase,
    /// Authoritative threshold (°C)
    pub threshold: i16,
    /// Slider representation of the threshold
    pub slider: i16,
    /// Text representation of the threshold
    pub text: i16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_inputs() {
        assert!(Intent::SetThreshold(80).is_threshold_input());
        assert!(Intent::SliderMoved(80).is_threshold_input());
        assert!(Intent::SliderReleased.is_threshold_input());
        assert!(Intent::TextEdited(80).is_threshold_input());
        assert!(Intent::TextCommitted.is_threshold_input());
        assert!(!Intent::Start.is_threshold_input());
        assert!(!Intent::Reset.is_threshold_input());
    }
}
