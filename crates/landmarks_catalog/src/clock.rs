//! Time source for year validation and export timestamps.

use chrono::{DateTime, Datelike, Local, Utc};
use std::fmt;

/// Source of "now" for a catalog.
///
/// The upper bound of `year_discovered` moves with the calendar, so tests
/// inject a [`FixedClock`] instead of reading the system clock.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// Wall clock. The current year follows the local calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_year() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.current_year(), 2024);
    }

    #[test]
    fn test_system_clock_is_recent() {
        assert!(SystemClock.current_year() >= 2024);
    }
}
