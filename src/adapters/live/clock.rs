//! Live clock backed by the system time.

use chrono::{DateTime, Timelike, Utc};

use crate::ports::Clock;

/// System clock with whole-second precision.
///
/// File names and release dates only use seconds, and cassettes then
/// store the same value the pipeline saw.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        now.with_nanosecond(0).unwrap_or(now)
    }
}
