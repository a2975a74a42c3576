//! Events that trigger phase transitions

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Operator pressed start
    Start,
    /// A sample at or above the threshold arrived
    ThresholdReached,
    /// Operator pressed reset
    Reset,
}
