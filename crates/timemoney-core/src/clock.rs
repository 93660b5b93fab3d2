//! Sources of the current time.

use time::OffsetDateTime;

use crate::Instant;

/// Answers "what time is it now".
pub trait TimeSource: Send + Sync {
    fn now(&self) -> Instant;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Instant {
        Instant::from_offset_datetime(OffsetDateTime::now_utc())
    }
}

/// Always reports the same instant. Useful for tests and "as of" runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Instant);

impl FixedClock {
    pub const fn new(instant: Instant) -> Self {
        Self(instant)
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let clock = FixedClock::new(Instant::from_millis(1_300_000_000_000));
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().millis(), 1_300_000_000_000);
    }

    #[test]
    fn system_clock_is_after_2020() {
        let floor = Instant::at_midnight(2020, 1, 1).expect("valid");
        assert!(SystemClock.now().is_after(floor));
    }
}
