//! Remote model client.
//!
//! [`TextGenerator`] is the seam between the application and the hosted model.
//! [`GeminiClient`] implements it against the Gemini Generative Language REST
//! API (`generateContent`). Tests substitute their own generators.
//!
//! # Auth
//! API key via the `x-goog-api-key` header. A client built without a key still
//! constructs; every call then fails with [`GenerateError::NotConfigured`].
//!
//! # Endpoint pattern
//! `POST {base_url}/v1beta/models/{model}:generateContent`

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::errors::GenerateError;
use super::prompts::{DEFAULT_MODEL, ModelRequest};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Trait for remote text generators.
///
/// Implementations send one self-contained prompt and return the raw text
/// answer. No retries are performed.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends `request` and returns the generated text, trimmed.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerateError`] if no credential is configured, the API
    /// rejects the call, or the transport fails.
    async fn generate(&self, request: &ModelRequest) -> Result<String, GenerateError>;

    /// Returns the display name of the backend.
    fn name(&self) -> &'static str;
}

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API key; `None` leaves the client unconfigured.
    pub api_key: Option<String>,
    /// Model identifier passed to the prompt builder.
    pub model: String,
    /// API host without a trailing path.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Gemini REST client.
pub struct GeminiClient {
    api_key: Option<String>,
    base_url: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Creates a client from `config`.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// Returns true when an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL of the `generateContent` endpoint for `model`.
    #[must_use]
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{model}:generateContent",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &ModelRequest) -> Result<String, GenerateError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(GenerateError::NotConfigured);
        };

        let url = self.endpoint(&request.model);
        let body = GenerateContentRequest::new(&request.prompt);

        debug!(
            model = %request.model,
            prompt_chars = request.prompt.chars().count(),
            "sending Gemini request"
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = api_error_message(status, &text);
            warn!(%status, %message, "Gemini request failed");
            return Err(GenerateError::Api(message));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::InvalidResponse(e.to_string()))?;

        let text = extract_text(parsed)?;
        debug!(response_chars = text.chars().count(), "Gemini request succeeded");
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "Gemini"
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Joins the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, GenerateError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GenerateError::InvalidResponse(format!(
            "prompt blocked: {reason}"
        )));
    }

    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .ok_or_else(|| GenerateError::InvalidResponse("no candidates returned".to_string()))?;

    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    Ok(text.trim().to_string())
}

/// Builds the failure message for a non-success HTTP answer.
///
/// Prefers the API's own `error.message`; falls back to the status line and
/// raw body.
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ if body.trim().is_empty() => status.to_string(),
        _ => format!("{status}: {}", body.trim()),
    }
}
