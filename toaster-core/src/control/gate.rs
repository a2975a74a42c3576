//! Once-per-second sampling gate
//!
//! The host loop runs far faster than the sensor should be read. The gate
//! fires on the first poll after each whole-second boundary and never
//! blocks.

/// Rate limiter that fires once per whole second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleGate {
    last_second: u64,
}

impl SampleGate {
    /// Create a gate armed for the next boundary after `now_ms`
    ///
    /// No sample is due in the second the gate was created in.
    pub const fn new(now_ms: u64) -> Self {
        Self {
            last_second: now_ms / 1000,
        }
    }

    /// Check if a sample is due
    ///
    /// Returns true exactly once per observed change of the whole-second
    /// value.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let second = now_ms / 1000;
        if second == self.last_second {
            return false;
        }

        self.last_second = second;
        true
    }
}
