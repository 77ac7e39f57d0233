//! Speech adapter - Implements SpeechSynthesisPort using ai_speech

use ai_speech::{FallbackSpeechProvider, SpeechError};
use application::error::ApplicationError;
use application::ports::{SpeechSynthesisPort, SynthesizedAudio};
use async_trait::async_trait;
use domain::{LanguageCode, VoiceSelection};
use tracing::{debug, instrument};

/// Adapter for the voice-routing speech provider
#[derive(Debug)]
pub struct SpeechAdapter {
    provider: FallbackSpeechProvider,
}

impl SpeechAdapter {
    pub const fn new(provider: FallbackSpeechProvider) -> Self {
        Self { provider }
    }

    /// Map speech error to application error
    ///
    /// Errors reaching this point already survived the fallback.
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Timeout(ms) => {
                ApplicationError::Timeout(format!("Speech service did not answer within {ms}ms"))
            },
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            other => ApplicationError::SynthesisFailed(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechSynthesisPort for SpeechAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len(), language = %language, voice = %voice))]
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
        voice: &VoiceSelection,
    ) -> Result<SynthesizedAudio, ApplicationError> {
        let audio = self
            .provider
            .synthesize(text, language.as_str(), voice)
            .await
            .map_err(Self::map_error)?;

        let format = audio.format();
        debug!(format = ?format, bytes = audio.size_bytes(), "Speech synthesized");
        Ok(SynthesizedAudio::new(audio.into_data(), format))
    }
}
