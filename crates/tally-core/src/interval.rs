//! Open time intervals - an in-progress tracking session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open-ended tracking session.
///
/// Only the start instant is recorded; closing the interval and accruing
/// the elapsed time is the application layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// When tracking started.
    pub start: DateTime<Utc>,
}

impl TimeInterval {
    /// Opens an interval at the given instant.
    #[must_use]
    pub const fn starting_at(start: DateTime<Utc>) -> Self {
        Self { start }
    }

    /// Whole seconds elapsed since the start, clamped at zero for a `now`
    /// before the start instant.
    #[must_use]
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> i64 {
        (now - self.start).num_seconds().max(0)
    }
}
