//! Recording adapter for the `TicketTracker` port.

use serde::Serialize;

use super::record_result;
use crate::cassette::ports::TICKETS;
use crate::cassette::session::SharedRecorder;
use crate::ports::{TicketFuture, TicketTracker};

/// Records ticket searches while delegating to an inner tracker.
pub struct RecordingTicketTracker {
    inner: Box<dyn TicketTracker>,
    recorder: SharedRecorder,
}

impl RecordingTicketTracker {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn TicketTracker>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct SearchInput {
    jql: String,
    max_results: u32,
}

impl TicketTracker for RecordingTicketTracker {
    fn search(&self, jql: &str, max_results: u32) -> TicketFuture<'_> {
        let input = SearchInput { jql: jql.to_string(), max_results };
        Box::pin(async move {
            let result = self.inner.search(&input.jql, input.max_results).await;
            record_result(&self.recorder, TICKETS, "search", &input, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::cassette::format::Cassette;
    use crate::cassette::recorder::CassetteRecorder;

    struct FailingTracker;
    impl TicketTracker for FailingTracker {
        fn search(&self, _jql: &str, _max_results: u32) -> TicketFuture<'_> {
            Box::pin(async { Err("Jira API error (401): Unauthorized".into()) })
        }
    }

    #[tokio::test]
    async fn records_errors_as_err_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "tickets")));

        let tracker = RecordingTicketTracker::new(Box::new(FailingTracker), Arc::clone(&recorder));
        assert!(tracker.search("project = \"SCRUM\"", 50).await.is_err());
        drop(tracker);
        Arc::try_unwrap(recorder).unwrap().into_inner().unwrap().finish().unwrap();

        let cassette = Cassette::load(&path).unwrap();
        let interaction = &cassette.interactions[0];
        assert_eq!(interaction.method, "search");
        assert_eq!(interaction.input["max_results"], 50);
        assert_eq!(interaction.output["err"], "Jira API error (401): Unauthorized");
    }
}
