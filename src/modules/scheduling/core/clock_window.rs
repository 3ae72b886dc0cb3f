use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_TOLERANCE_MINUTES: i64 = 30;

/// Symmetric, inclusive tolerance around a scheduled instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockWindow {
    tolerance: Duration,
}

impl Default for ClockWindow {
    fn default() -> Self {
        Self::minutes(DEFAULT_TOLERANCE_MINUTES)
    }
}

impl ClockWindow {
    pub fn minutes(minutes: i64) -> Self {
        Self {
            tolerance: Duration::minutes(minutes.max(0)),
        }
    }

    pub fn bounds(&self, anchor: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        (anchor - self.tolerance, anchor + self.tolerance)
    }

    pub fn contains(&self, anchor: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let (earliest, latest) = self.bounds(anchor);
        earliest <= now && now <= latest
    }
}
