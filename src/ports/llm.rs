//! LLM port: one prompt in, generated Markdown out.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use super::PortError;

/// Future returned by [`LlmClient::complete`]; boxed so the trait stays object safe.
pub type LlmFuture<'a> =
    Pin<Box<dyn Future<Output = Result<CompletionResponse, PortError>> + Send + 'a>>;

/// A single-turn generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The model identifier (e.g. `"gemini-1.5-flash"`).
    pub model: String,
    /// Prompt text sent as the only user turn.
    pub prompt: String,
    /// Cap on generated tokens.
    pub max_tokens: u32,
}

/// The response from an LLM completion call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionResponse {
    /// Generated Markdown.
    pub text: String,
    /// Prompt tokens billed, or 0 when the provider does not report usage.
    pub prompt_tokens: u32,
    /// Generated tokens billed, or 0 when not reported.
    pub completion_tokens: u32,
}

/// Language model used to write release notes.
pub trait LlmClient: Send + Sync {
    /// Runs one generation.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider rejects the request or returns no
    /// text; the message is surfaced to the user as-is.
    fn complete(&self, request: &CompletionRequest) -> LlmFuture<'_>;
}
