//! Phase definition and transition table
//!
//! All actuator and timing behavior is a function of the current phase
//! and an event.

use super::events::Event;

/// Toast cycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Not started, carriage up
    #[default]
    Idle,
    /// Carriage down, waiting for the threshold
    Active,
    /// Threshold crossed, carriage up, waiting for reset
    Done,
}

impl Phase {
    /// Check if the carriage should be lowered in this phase
    pub fn is_engaged(&self) -> bool {
        matches!(self, Phase::Active)
    }

    /// Check if samples are compared against the threshold in this phase
    pub fn compares_samples(&self) -> bool {
        matches!(self, Phase::Active)
    }

    /// Check if the threshold may be changed in this phase
    pub fn accepts_threshold(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Active)
    }

    /// Process an event and return the next phase
    ///
    /// Only the four defined transitions change the phase; every other
    /// combination is ignored.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            (Idle, Start) => Active,
            (Active, ThresholdReached) => Done,
            (Done, Reset) => Idle,

            // Default: stay in current phase
            _ => self,
        }
    }
}
