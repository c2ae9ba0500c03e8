//! Replaying adapter for the `TicketTracker` port.

use super::{next_output, replay_result};
use crate::cassette::config::SharedReplayer;
use crate::cassette::ports::TICKETS;
use crate::ports::{TicketFuture, TicketTracker};

/// Serves recorded ticket search results.
pub struct ReplayingTicketTracker {
    replayer: Option<SharedReplayer>,
}

impl ReplayingTicketTracker {
    /// Creates a tracker backed by `replayer`.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer: Some(replayer) }
    }

    /// Creates a tracker with no cassette. Panics when called.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { replayer: None }
    }
}

impl TicketTracker for ReplayingTicketTracker {
    fn search(&self, _jql: &str, _max_results: u32) -> TicketFuture<'_> {
        let output = next_output(self.replayer.as_ref(), TICKETS, "search");
        Box::pin(async move { replay_result(output) })
    }
}
