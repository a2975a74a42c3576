//! Monotonic time source

/// Monotonic clock
///
/// Returns milliseconds since an arbitrary epoch (usually boot). The value
/// must never decrease.
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_reference_forwards() {
        fn read<C: Clock>(clock: C) -> u64 {
            clock.now_ms()
        }

        let clock = FixedClock(4_999);
        assert_eq!(read(&clock), 4_999);
        assert_eq!(read(&&clock), 4_999);
    }
}
