//! Replaying adapter for the `Notifier` port.

use super::{next_output, replay_result};
use crate::cassette::config::SharedReplayer;
use crate::cassette::ports::NOTIFIER;
use crate::ports::{Notification, Notifier, NotifyFuture};

/// Serves recorded delivery outcomes.
pub struct ReplayingNotifier {
    replayer: Option<SharedReplayer>,
}

impl ReplayingNotifier {
    /// Creates a notifier backed by `replayer`.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer: Some(replayer) }
    }

    /// Creates a notifier with no cassette. Panics when called.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { replayer: None }
    }
}

impl Notifier for ReplayingNotifier {
    fn send(&self, _notification: &Notification) -> NotifyFuture<'_> {
        let output = next_output(self.replayer.as_ref(), NOTIFIER, "send");
        Box::pin(async move { replay_result(output) })
    }
}
