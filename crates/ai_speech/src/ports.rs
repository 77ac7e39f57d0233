//! Port definitions for speech synthesis

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioData, SpeechRequest};

/// Port for Text-to-Speech (TTS) backends
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech for the request
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable, rejects the request
    /// or returns audio that cannot be decoded.
    async fn synthesize(&self, request: SpeechRequest<'_>) -> Result<AudioData, SpeechError>;

    /// Backend name for logs
    fn name(&self) -> &'static str;
}
