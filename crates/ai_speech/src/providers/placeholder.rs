//! Placeholder text-to-speech
//!
//! Writes the text itself as a UTF-8 `.txt` artifact. Used where no speech
//! service is reachable, and in tests.

use async_trait::async_trait;
use domain::AudioFormat;
use tracing::debug;

use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, SpeechRequest};

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTtsProvider;

impl PlaceholderTtsProvider {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextToSpeech for PlaceholderTtsProvider {
    async fn synthesize(&self, request: SpeechRequest<'_>) -> Result<AudioData, SpeechError> {
        debug!(language = request.language, "Writing placeholder audio");
        Ok(AudioData::new(
            request.text.as_bytes().to_vec(),
            AudioFormat::PlainText,
        ))
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}
