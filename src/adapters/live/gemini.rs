//! Live adapter for the `LlmClient` port using the Gemini `generateContent` API.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ports::llm::{CompletionRequest, CompletionResponse, LlmClient, LlmFuture};
use crate::ports::PortError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Live LLM client that calls the Google Generative Language API.
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    /// Creates a client authenticating with `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { client: Client::new(), api_key: api_key.into() }
    }
}

/// Request body sent to `generateContent`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

/// Top-level response from `generateContent`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

/// Error envelope returned by Google APIs.
#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Converts a successful response body into a [`CompletionResponse`].
fn parse_response(body: &str) -> Result<CompletionResponse, PortError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| -> PortError { format!("Failed to parse Gemini API response: {e}").into() })?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();
    if text.is_empty() {
        return Err("Gemini API returned no generated text".into());
    }

    let usage = response.usage_metadata;
    Ok(CompletionResponse {
        text,
        prompt_tokens: usage.as_ref().map_or(0, |u| u.prompt_token_count),
        completion_tokens: usage.as_ref().map_or(0, |u| u.candidates_token_count),
    })
}

impl LlmClient for GeminiClient {
    fn complete(&self, request: &CompletionRequest) -> LlmFuture<'_> {
        let model = request.model.clone();
        let prompt = request.prompt.clone();
        let max_tokens = request.max_tokens;

        Box::pin(async move {
            let body = GenerateRequest {
                contents: vec![Content {
                    role: "user",
                    parts: vec![RequestPart { text: &prompt }],
                }],
                generation_config: GenerationConfig { max_output_tokens: max_tokens },
            };

            let response = self
                .client
                .post(format!("{GEMINI_API_BASE}/{model}:generateContent"))
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| -> PortError { format!("Gemini API request failed: {e}").into() })?;

            let status = response.status();
            let response_text = response.text().await.map_err(|e| -> PortError {
                format!("Failed to read Gemini API response: {e}").into()
            })?;

            if !status.is_success() {
                let msg = serde_json::from_str::<ApiError>(&response_text)
                    .map(|e| e.error.message)
                    .unwrap_or(response_text);
                return Err(format!("Gemini API error ({}): {msg}", status.as_u16()).into());
            }

            parse_response(&response_text)
        })
    }
}
