//! Replaying adapters: serve port calls from recorded cassettes.
//!
//! An adapter built with `unconfigured()` has no cassette and panics when
//! called, naming the port that was missing.

pub mod clock;
pub mod llm;
pub mod notifier;
pub mod tickets;

pub use clock::ReplayingClock;
pub use llm::ReplayingLlmClient;
pub use notifier::ReplayingNotifier;
pub use tickets::ReplayingTicketTracker;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cassette::config::SharedReplayer;
use crate::ports::PortError;

/// Takes the next recorded output for `port`/`method`.
///
/// # Panics
///
/// Panics if the adapter has no cassette or the cassette is exhausted.
pub(crate) fn next_output(replayer: Option<&SharedReplayer>, port: &str, method: &str) -> Value {
    let Some(replayer) = replayer else {
        panic!("{port} port not configured for replay: no cassette loaded for {port}::{method}");
    };
    let mut guard = replayer.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    guard.next_interaction(port, method).output
}

/// Decodes an `{"ok": value}` / `{"err": message}` output.
pub(crate) fn replay_result<T: DeserializeOwned>(output: Value) -> Result<T, PortError> {
    if let Some(message) = output.get("err") {
        let message = message.as_str().map_or_else(|| message.to_string(), str::to_string);
        return Err(message.into());
    }
    let value = output.get("ok").cloned().unwrap_or(output);
    serde_json::from_value(value)
        .map_err(|e| -> PortError { format!("Recorded output does not decode: {e}").into() })
}
