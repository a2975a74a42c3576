//! Toast session timing
//!
//! One cook cycle: when it started, whether it finished, and how long it
//! took. Elapsed time runs while the session is active and freezes at the
//! crossing.

/// One cook cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToastSession {
    /// Start instant (ms), `None` until started
    start_ms: Option<u64>,
    /// Threshold crossed
    done: bool,
    /// Elapsed seconds latched at the crossing
    latched_s: u32,
}

impl ToastSession {
    /// Create a session in the "not started" state
    pub const fn new() -> Self {
        Self {
            start_ms: None,
            done: false,
            latched_s: 0,
        }
    }

    /// Start instant (ms), if started
    pub fn start_ms(&self) -> Option<u64> {
        self.start_ms
    }

    /// Check if the threshold has been crossed
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Begin timing at `now_ms`
    pub fn start(&mut self, now_ms: u64) {
        self.start_ms = Some(now_ms);
        self.done = false;
        self.latched_s = 0;
    }

    /// Mark the session done and latch the elapsed time
    ///
    /// Returns the latched seconds.
    pub fn finish(&mut self, now_ms: u64) -> u32 {
        self.latched_s = self.elapsed_seconds(now_ms);
        self.done = true;
        self.latched_s
    }

    /// Return to "not started"
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Whole seconds of toasting
    ///
    /// Live while active, frozen once done, zero when not started.
    pub fn elapsed_seconds(&self, now_ms: u64) -> u32 {
        if self.done {
            return self.latched_s;
        }

        match self.start_ms {
            Some(start) => {
                let secs = now_ms.saturating_sub(start) / 1000;
                u32::try_from(secs).unwrap_or(u32::MAX)
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_started() {
        let s = ToastSession::new();
        assert_eq!(s.start_ms(), None);
        assert!(!s.is_done());
        assert_eq!(s.elapsed_seconds(10_000), 0);
    }

    #[test]
    fn test_start_at_time_zero_counts_as_started() {
        let mut s = ToastSession::new();
        s.start(0);
        assert_eq!(s.start_ms(), Some(0));
        assert_eq!(s.elapsed_seconds(2_500), 2);
    }

    #[test]
    fn test_elapsed_runs_while_active() {
        let mut s = ToastSession::new();
        s.start(1_000);
        assert_eq!(s.elapsed_seconds(1_000), 0);
        assert_eq!(s.elapsed_seconds(1_999), 0);
        assert_eq!(s.elapsed_seconds(2_000), 1);
        assert_eq!(s.elapsed_seconds(61_000), 60);
    }

    #[test]
    fn test_elapsed_frozen_when_done() {
        let mut s = ToastSession::new();
        s.start(0);
        assert_eq!(s.finish(4_000), 4);
        assert!(s.is_done());
        assert_eq!(s.elapsed_seconds(5_000), 4);
        assert_eq!(s.elapsed_seconds(100_000), 4);
    }

    #[test]
    fn test_clear() {
        let mut s = ToastSession::new();
        s.start(500);
        s.finish(3_500);
        s.clear();
        assert_eq!(s, ToastSession::new());
        assert_eq!(s.start_ms(), None);
        assert_eq!(s.elapsed_seconds(10_000), 0);
    }

    #[test]
    fn test_clock_behind_start_saturates() {
        let mut s = ToastSession::new();
        s.start(5_000);
        assert_eq!(s.elapsed_seconds(4_000), 0);
    }
}
