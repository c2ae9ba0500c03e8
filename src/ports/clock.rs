//! Clock port.

use chrono::{DateTime, Utc};

/// Source of "now" for release dates and output file names.
///
/// Replayed runs serve recorded instants so saved file names match the
/// recording.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}
