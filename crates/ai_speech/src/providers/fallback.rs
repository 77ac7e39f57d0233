//! Voice routing with fallback to the standard voice
//!
//! ```text
//!  voice == "standard" ─────────────────────────────┐
//!                                                    ▼
//!  named voice ──▶ named backend ──(any error)──▶ standard backend
//!                      │                             │
//!                      ▼                             ▼
//!                    audio                         audio
//! ```
//!
//! A named-voice failure never reaches the caller; the standard backend is
//! retried with the same text and the originally requested language.

use std::sync::Arc;

use domain::VoiceSelection;
use tracing::{debug, info, instrument, warn};

use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, SpeechRequest};

/// Routes requests between a standard and a named-voice backend
pub struct FallbackSpeechProvider {
    standard: Arc<dyn TextToSpeech>,
    named: Arc<dyn TextToSpeech>,
}

impl std::fmt::Debug for FallbackSpeechProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackSpeechProvider")
            .field("standard", &self.standard.name())
            .field("named", &self.named.name())
            .finish()
    }
}

impl FallbackSpeechProvider {
    pub fn new(standard: Arc<dyn TextToSpeech>, named: Arc<dyn TextToSpeech>) -> Self {
        info!(
            standard = standard.name(),
            named = named.name(),
            "Speech routing initialized"
        );
        Self { standard, named }
    }

    /// Synthesize with the backend selected by `voice`
    ///
    /// # Errors
    ///
    /// Returns the standard backend's error; named-voice errors are logged
    /// and recovered.
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn synthesize(
        &self,
        text: &str,
        language: &str,
        voice: &VoiceSelection,
    ) -> Result<AudioData, SpeechError> {
        let request = SpeechRequest::new(text, language);

        if let VoiceSelection::Named(name) = voice {
            debug!(backend = self.named.name(), "Attempting named-voice synthesis");
            match self.named.synthesize(request.with_voice(name)).await {
                Ok(audio) => return Ok(audio),
                Err(e) if e.is_rate_limited() => {
                    warn!("Named-voice TTS rate limit exceeded, falling back to standard voice");
                },
                Err(e) => {
                    warn!("Named-voice TTS failed: {e}, falling back to standard voice");
                },
            }
        }

        self.standard.synthesize(request).await
    }
}
