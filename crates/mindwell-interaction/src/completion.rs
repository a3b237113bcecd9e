//! Chat-completions client for OpenAI-compatible providers.
//!
//! One non-streaming POST per round trip, no retries, no client-side
//! timeout beyond the transport default. Failure modes are kept
//! distinct: transport errors, non-2xx responses (carrying the
//! provider's own error text when parseable), and 2xx responses with no
//! usable choices.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use mindwell_core::chat::{ChatMessage, CompletionBackend};
use mindwell_core::config::AiConfig;
use mindwell_core::{MindwellError, Result};

/// Fixed sampling temperature for every request. Kept as f64 so every
/// serialization path emits exactly `0.7` on the wire.
const SAMPLING_TEMPERATURE: f64 = 0.7;

/// HTTP client for `{base_url}/chat/completions`.
#[derive(Clone, Default)]
pub struct CompletionClient {
    client: Client,
}

impl CompletionClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Joins the configured base URL with the completions path,
    /// tolerating a trailing slash.
    fn endpoint(base_url: &str) -> String {
        format!("{}/chat/completions", base_url.trim_end_matches('/'))
    }

    async fn send_request(
        &self,
        url: &str,
        api_key: &str,
        body: &ChatCompletionRequest,
    ) -> Result<String> {
        tracing::debug!(model = %body.model, messages = body.messages.len(), "sending completion request");

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| MindwellError::transport(format!("request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            MindwellError::MalformedResponse(format!("failed to parse response body: {err}"))
        })?;

        extract_text(parsed)
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, messages: &[ChatMessage], config: &AiConfig) -> Result<String> {
        // The session checks this pre-flight; guard again so the client
        // alone can never leak an empty bearer token.
        if !config.has_api_key() {
            return Err(MindwellError::config(
                "API key is missing; configure it in settings",
            ));
        }

        let request = ChatCompletionRequest {
            model: config.model.clone(),
            messages: messages.to_vec(),
            temperature: SAMPLING_TEMPERATURE,
            stream: false,
        };

        self.send_request(&Self::endpoint(&config.base_url), &config.api_key, &request)
            .await
    }
}

/// Maps a non-2xx response onto a provider error, preferring the
/// provider's structured `error.message` when the body parses.
fn map_http_error(status: StatusCode, body: String) -> MindwellError {
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
        Err(_) => body,
    };
    MindwellError::Provider {
        status: status.as_u16(),
        message,
    }
}

/// Pulls the first choice's text out of a successful response. An empty
/// choices array is a failure, not an empty success.
fn extract_text(response: ChatCompletionResponse) -> Result<String> {
    let choice = response.choices.into_iter().next().ok_or_else(|| {
        MindwellError::MalformedResponse("no choices in provider response".to_string())
    })?;
    Ok(choice.message.content.unwrap_or_default())
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
