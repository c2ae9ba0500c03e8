//! Cassettes: YAML recordings of port interactions used for deterministic replay.
//!
//! A cassette holds an ordered list of interactions. Each names the port
//! and method it came from and carries the JSON-encoded input and output.
//! Fallible calls encode their output as `{"ok": value}` or
//! `{"err": "message"}`.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;

/// Port names used as the `port` field of recorded interactions.
pub mod ports {
    /// Clock port.
    pub const CLOCK: &str = "clock";
    /// LLM port.
    pub const LLM: &str = "llm";
    /// Ticket tracker port.
    pub const TICKETS: &str = "tickets";
    /// Notifier port.
    pub const NOTIFIER: &str = "notifier";

    /// Every recordable port, in the order session directories list them.
    pub const ALL: [&str; 4] = [CLOCK, LLM, TICKETS, NOTIFIER];
}
