//! Ticket tracker port for reading work items.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use super::PortError;

/// Boxed future returned by [`TicketTracker::search`].
pub type TicketFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<Ticket>, PortError>> + Send + 'a>>;

/// A ticket as embedded into the generation prompt.
///
/// Optional tracker fields are already replaced by their display defaults
/// ("Unassigned", "Unresolved", ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    /// Tracker key, e.g. `PROJ-123`.
    pub key: String,
    /// One-line summary.
    pub summary: String,
    /// Workflow status name.
    pub status: String,
    /// Issue type name (Bug, Story, ...).
    pub issue_type: String,
    /// Free-form description.
    pub description: String,
    /// Assignee display name.
    pub assignee: String,
    /// Reporter display name.
    pub reporter: String,
    /// Priority name.
    pub priority: String,
    /// Resolution name.
    pub resolution: String,
    /// Creation timestamp as reported by the tracker.
    pub created: String,
    /// Last-update timestamp as reported by the tracker.
    pub updated: String,
}

/// Queries an external ticket tracker.
pub trait TicketTracker: Send + Sync {
    /// Runs a tracker query and returns at most `max_results` tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if the tracker rejects the query or is unreachable.
    fn search(&self, jql: &str, max_results: u32) -> TicketFuture<'_>;
}
