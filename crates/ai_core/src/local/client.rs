//! HTTP client for a locally hosted summarization model
//!
//! Speaks the Hugging Face inference API shape:
//! `POST {base_url}/models/{model}` with `{"inputs", "parameters"}` and a
//! `[{"summary_text"}]` response.

use std::time::Duration;

use async_trait::async_trait;
use domain::text::truncate_chars;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::LocalModelConfig;
use crate::error::InferenceError;
use crate::ports::{SummarizationEngine, SummaryRequest};

/// Summarizer backed by a local sequence-to-sequence model
///
/// Sampling is always disabled, so identical input yields identical output.
/// The target language is ignored; summaries come out in the source language.
#[derive(Debug)]
pub struct LocalSummarizationEngine {
    client: Client,
    config: LocalModelConfig,
}

#[derive(Debug, Serialize)]
struct SummarizationPayload<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Debug, Serialize)]
struct SummarizationParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
    truncation: bool,
}

#[derive(Debug, Deserialize)]
struct SummarizationOutput {
    summary_text: String,
}

impl LocalSummarizationEngine {
    /// Create a new engine; the HTTP client is built once and reused
    pub fn new(config: LocalModelConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized local summarization engine"
        );

        Ok(Self { client, config })
    }

    fn model_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl SummarizationEngine for LocalSummarizationEngine {
    #[instrument(skip(self, request), fields(mode = %request.mode, chars = request.text.len()))]
    async fn summarize(&self, request: SummaryRequest) -> Result<String, InferenceError> {
        let policy = request.mode.length_policy();
        let inputs = truncate_chars(&request.text, self.config.max_input_chars);
        if inputs.len() < request.text.len() {
            debug!(
                max_chars = self.config.max_input_chars,
                "Input truncated to model context"
            );
        }

        let payload = SummarizationPayload {
            inputs,
            parameters: SummarizationParameters {
                max_length: policy.max_length,
                min_length: policy.min_length,
                do_sample: false,
                truncation: true,
            },
        };

        let response = self
            .client
            .post(self.model_url())
            .json(&payload)
            .send()
            .await
            .map_err(|e| InferenceError::from_reqwest(&e, self.config.timeout_ms))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Summarization request failed");
            return Err(InferenceError::ServerError(format!("Status {status}: {body}")));
        }

        let outputs: Vec<SummarizationOutput> = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let summary = outputs
            .into_iter()
            .next()
            .map(|output| output.summary_text.trim().to_string())
            .ok_or_else(|| InferenceError::InvalidResponse("empty summary list".to_string()))?;

        debug!(summary_chars = summary.chars().count(), "Summarization completed");
        Ok(summary)
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
