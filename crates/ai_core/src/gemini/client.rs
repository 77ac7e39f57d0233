//! Gemini `generateContent` client
//!
//! The HTTP client is built on first use. A missing API key is reported when
//! a request is made, never at construction, so the process starts without
//! one and only Gemini-backed requests fail.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};

use crate::config::GeminiConfig;
use crate::error::{InferenceError, RATE_LIMIT_HINT};

/// Environment variable holding the Gemini credential
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Vendor status string signalling quota exhaustion
const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";

/// Shared Gemini text client
pub struct GeminiClient {
    config: GeminiConfig,
    api_key: Option<SecretString>,
    http: OnceCell<Client>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("initialized", &self.http.initialized())
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig, api_key: Option<SecretString>) -> Self {
        Self {
            config,
            api_key: api_key.filter(|key| !key.expose_secret().trim().is_empty()),
            http: OnceCell::new(),
        }
    }

    /// Whether a credential is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    async fn http(&self) -> Result<&Client, InferenceError> {
        self.http
            .get_or_try_init(|| async {
                debug!("Building Gemini HTTP client");
                Client::builder()
                    .timeout(Duration::from_millis(self.config.timeout_ms))
                    .build()
                    .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))
            })
            .await
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send a single-turn prompt and return the generated text
    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_chars = prompt.len()))]
    pub async fn generate_text(&self, prompt: &str) -> Result<String, InferenceError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(InferenceError::MissingApiKey(API_KEY_VAR))?;
        let client = self.http().await?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceError::from_reqwest(&e, self.config.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| InferenceError::InvalidResponse("no text in response".to_string()))?;

        debug!(output_chars = text.chars().count(), "Gemini generation completed");
        Ok(text)
    }
}

/// Map a non-success response to a rate limit or a server error
pub(crate) fn classify_failure(status: StatusCode, body: &str) -> InferenceError {
    if status == StatusCode::TOO_MANY_REQUESTS || body.contains(RESOURCE_EXHAUSTED) {
        warn!(status = %status, "Gemini rate limit exceeded");
        return InferenceError::RateLimited(RATE_LIMIT_HINT.to_string());
    }

    let message = serde_json::from_str::<ErrorEnvelope>(body).map_or_else(
        |_| body.to_string(),
        |envelope| format!("{} ({})", envelope.error.message, envelope.error.status),
    );
    warn!(status = %status, message = %message, "Gemini request failed");
    InferenceError::ServerError(format!("Status {status}: {message}"))
}
