//! Replaying adapter for the `Clock` port.

use chrono::{DateTime, Utc};

use super::next_output;
use crate::cassette::config::SharedReplayer;
use crate::cassette::ports::CLOCK;
use crate::ports::Clock;

/// Serves recorded timestamps.
pub struct ReplayingClock {
    replayer: Option<SharedReplayer>,
}

impl ReplayingClock {
    /// Creates a clock backed by `replayer`.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer: Some(replayer) }
    }

    /// Creates a clock with no cassette. Panics when called.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { replayer: None }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> DateTime<Utc> {
        let output = next_output(self.replayer.as_ref(), CLOCK, "now");
        serde_json::from_value(output.clone()).unwrap_or_else(|e| {
            panic!("clock::now: recorded value {output} is not a timestamp: {e}")
        })
    }
}
