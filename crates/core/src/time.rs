use chrono::{DateTime, TimeZone, Utc};

/// Source of "now" for record timestamps.
///
/// Services take a `Clock` by value so tests can freeze time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Frozen(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn frozen_at(at: DateTime<Utc>) -> Self {
        Self::Frozen(at)
    }

    #[must_use]
    pub fn now(self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Frozen(at) => at,
        }
    }
}

/// Unix seconds used by every test timestamp (2024-03-01T09:00:00Z).
pub const TEST_EPOCH_SECS: i64 = 1_709_283_600;

/// The shared test instant, or the Unix epoch if it ever stops being valid.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.timestamp_opt(TEST_EPOCH_SECS, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::frozen_at(fixed_now())
}
