//! Google Translate text-to-speech
//!
//! The language-driven standard voice. The endpoint accepts short inputs
//! only, so text is split on word boundaries and the MP3 responses are
//! concatenated; MPEG frames are self-delimiting, so the result plays back
//! as one stream.

use std::time::Duration;

use async_trait::async_trait;
use domain::AudioFormat;
use domain::text::split_into_chunks;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::config::GoogleTtsConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, SpeechRequest};

/// Standard TTS backend
#[derive(Debug, Clone)]
pub struct GoogleTtsProvider {
    client: Client,
    config: GoogleTtsConfig,
}

impl GoogleTtsProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: GoogleTtsConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn tts_url(&self) -> String {
        format!("{}/translate_tts", self.config.base_url.trim_end_matches('/'))
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, SpeechError> {
        let index = index.to_string();
        let total = total.to_string();
        let text_len = chunk.chars().count().to_string();

        let response = self
            .client
            .get(self.tts_url())
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", chunk),
                ("idx", index.as_str()),
                ("total", total.as_str()),
                ("textlen", text_len.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.config.timeout_ms))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SpeechError::RateLimited(
                "Google TTS rejected the request".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "TTS request failed");
            return Err(SpeechError::RequestFailed(format!("HTTP {status}: {body}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;
        if bytes.is_empty() {
            return Err(SpeechError::InvalidResponse("empty audio body".to_string()));
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl TextToSpeech for GoogleTtsProvider {
    #[instrument(skip(self, request), fields(chars = request.text.len(), language = request.language))]
    async fn synthesize(&self, request: SpeechRequest<'_>) -> Result<AudioData, SpeechError> {
        let chunks = split_into_chunks(request.text, self.config.max_chunk_chars);
        if chunks.is_empty() {
            return Err(SpeechError::SynthesisFailed("no text to speak".to_string()));
        }

        let total = chunks.len();
        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let bytes = self
                .fetch_chunk(chunk, request.language, index, total)
                .await?;
            audio.extend_from_slice(&bytes);
        }

        debug!(chunks = total, bytes = audio.len(), "Standard TTS complete");
        Ok(AudioData::new(audio, AudioFormat::Mp3))
    }

    fn name(&self) -> &'static str {
        "google-tts"
    }
}
