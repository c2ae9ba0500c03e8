//! Recording adapters: delegate to an inner port and log each call to a cassette.

pub mod clock;
pub mod llm;
pub mod notifier;
pub mod tickets;

pub use clock::RecordingClock;
pub use llm::RecordingLlmClient;
pub use notifier::RecordingNotifier;
pub use tickets::RecordingTicketTracker;

use serde::Serialize;
use serde_json::{json, Value};

use crate::cassette::session::SharedRecorder;

fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| json!({ "unserializable": e.to_string() }))
}

/// Records a call whose return value is not a `Result`.
///
/// Mirror of `replaying::next_output`.
pub(crate) fn record_interaction<I, O>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let (input, output) = (to_value(input), to_value(output));
    if let Ok(mut guard) = recorder.lock() {
        guard.record(port, method, input, output);
    }
}

/// Records a fallible call as `{"ok": value}` or `{"err": message}`.
///
/// Mirror of `replaying::replay_result`.
pub(crate) fn record_result<T, E, I>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(v) => json!({ "ok": to_value(v) }),
        Err(e) => json!({ "err": e.to_string() }),
    };
    record_interaction(recorder, port, method, input, &output);
}
