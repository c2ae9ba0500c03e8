//! Recording adapter for the `LlmClient` port.

use super::record_result;
use crate::cassette::ports::LLM;
use crate::cassette::session::SharedRecorder;
use crate::ports::{CompletionRequest, LlmClient, LlmFuture};

/// Records completions while delegating to an inner client.
pub struct RecordingLlmClient {
    inner: Box<dyn LlmClient>,
    recorder: SharedRecorder,
}

impl RecordingLlmClient {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn LlmClient>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl LlmClient for RecordingLlmClient {
    fn complete(&self, request: &CompletionRequest) -> LlmFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let result = self.inner.complete(&request).await;
            record_result(&self.recorder, LLM, "complete", &request, &result);
            result
        })
    }
}
