use chrono::{DateTime, Duration, Utc};

/// Clock used to turn wall time into the study-day counter fed to
/// [`practice`](crate::scheduler::practice).
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// Whole days elapsed since `started_at`, the day a deck was started.
    ///
    /// A start in the future counts as day 0.
    #[must_use]
    pub fn study_day(&self, started_at: DateTime<Utc>) -> u64 {
        u64::try_from((self.now() - started_at).num_days()).unwrap_or(0)
    }
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn study_day_counts_whole_days() {
        let start = fixed_now();
        let mut clock = fixed_clock();
        assert_eq!(clock.study_day(start), 0);

        clock.advance(Duration::hours(23));
        assert_eq!(clock.study_day(start), 0);

        clock.advance(Duration::hours(1));
        assert_eq!(clock.study_day(start), 1);

        clock.advance(Duration::days(5));
        assert_eq!(clock.study_day(start), 6);
    }

    #[test]
    fn future_start_is_day_zero() {
        let clock = fixed_clock();
        assert_eq!(clock.study_day(fixed_now() + Duration::days(3)), 0);
    }

    #[test]
    fn default_clock_ignores_advance() {
        let mut clock = Clock::default();
        clock.advance(Duration::days(10));
        assert!(matches!(clock, Clock::Default));
    }
}
