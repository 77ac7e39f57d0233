//! Google Translate client
//!
//! HTTP client for `GET {base_url}/translate_a/single`.

use std::time::Duration;

use async_trait::async_trait;
use domain::text::split_into_chunks;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{Translation, parse_response};

/// Translation client errors
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Connection to the translation service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the translation service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from translation service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request exceeded its deadline
    #[error("Translation timed out after {0}s")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Translation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Endpoint base URL (default: <https://translate.googleapis.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Longest text sent in one request (default: 4500 characters)
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

fn default_base_url() -> String {
    "https://translate.googleapis.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_max_chunk_chars() -> usize {
    4500
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_chunk_chars: default_max_chunk_chars(),
        }
    }
}

/// Translation client trait
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Translate `text` into `target`, auto-detecting the source language
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError>;
}

/// Google Translate HTTP client implementation
#[derive(Debug)]
pub struct GoogleTranslateClient {
    client: Client,
    config: TranslateConfig,
}

impl GoogleTranslateClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: TranslateConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslateError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, TranslateError> {
        Self::new(TranslateConfig::default())
    }

    fn map_transport_error(&self, err: &reqwest::Error) -> TranslateError {
        if err.is_timeout() {
            TranslateError::Timeout(self.config.timeout_secs)
        } else if err.is_connect() {
            TranslateError::ConnectionFailed(err.to_string())
        } else {
            TranslateError::RequestFailed(err.to_string())
        }
    }

    /// Translate one chunk that fits in a single request
    async fn translate_chunk(&self, chunk: &str, target: &str) -> Result<Translation, TranslateError> {
        let url = format!(
            "{}/translate_a/single",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", chunk),
            ])
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslateError::RateLimitExceeded);
        }
        if !status.is_success() {
            warn!(status = %status, "Translation request failed");
            return Err(TranslateError::RequestFailed(format!("HTTP {status}")));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::ParseError(e.to_string()))?;

        parse_response(&value)
            .ok_or_else(|| TranslateError::ParseError("Unexpected response shape".to_string()))
    }
}

#[async_trait]
impl TranslationClient for GoogleTranslateClient {
    #[instrument(skip(self, text), fields(chars = text.len(), target = %target))]
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let chunks = if text.chars().count() <= self.config.max_chunk_chars {
            vec![text.to_string()]
        } else {
            split_into_chunks(text, self.config.max_chunk_chars)
        };

        let mut translated = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let translation = self.translate_chunk(chunk, target).await?;
            debug!(
                detected = translation.detected_source.as_deref().unwrap_or("unknown"),
                "Translated chunk"
            );
            translated.push(translation.text);
        }

        Ok(translated.join(" "))
    }
}
