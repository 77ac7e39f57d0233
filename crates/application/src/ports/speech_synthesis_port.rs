//! Speech synthesis port - Interface for text-to-speech

use async_trait::async_trait;
use domain::{AudioFormat, LanguageCode, VoiceSelection};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Audio produced by a synthesis backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    /// Encoded file contents
    pub data: Vec<u8>,
    /// Format of `data`, which decides the artifact's extension
    pub format: AudioFormat,
}

impl SynthesizedAudio {
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }
}

/// Port for speech synthesis
///
/// Implementations own voice routing and any fallback between backends; an
/// error returned here means every applicable backend failed.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
        voice: &VoiceSelection,
    ) -> Result<SynthesizedAudio, ApplicationError>;
}
