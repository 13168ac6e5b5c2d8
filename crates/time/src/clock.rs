//! Clock seam: anything that can produce "now".

use chrono::{DateTime, Local};

/// A source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at a single instant. Useful for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn at(instant: DateTime<Local>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

// Closures are clocks too.
impl<F> Clock for F
where
    F: Fn() -> DateTime<Local>,
{
    fn now(&self) -> DateTime<Local> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_always_reports_its_instant() {
        let instant = Local.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn a_closure_acts_as_a_clock() {
        let instant = Local.with_ymd_and_hms(1990, 6, 15, 8, 30, 0).unwrap();
        let clock = move || instant;
        assert_eq!(Clock::now(&clock), instant);
    }

    #[test]
    fn system_clock_tracks_real_time() {
        let before = Local::now();
        let reading = SystemClock.now();
        let after = Local::now();
        assert!(before <= reading && reading <= after);
    }
}
