//! Audio service - Turns a (translated) summary into a retrievable artifact

use std::{fmt, sync::Arc, time::Instant};

use domain::{AudioArtifact, LanguageCode, VoiceSelection};
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{FileStorePort, SpeechSynthesisPort},
};

/// Input of the generate-audio operation, as received from a caller
#[derive(Debug, Clone, Default)]
pub struct GenerateAudioRequest {
    pub text: Option<String>,
    pub language: Option<String>,
    pub voice: Option<String>,
}

/// Service for synthesizing summary audio
pub struct AudioService {
    synthesizer: Arc<dyn SpeechSynthesisPort>,
    file_store: Arc<dyn FileStorePort>,
}

impl fmt::Debug for AudioService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioService").finish_non_exhaustive()
    }
}

impl AudioService {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesisPort>,
        file_store: Arc<dyn FileStorePort>,
    ) -> Self {
        Self {
            synthesizer,
            file_store,
        }
    }

    /// Validate, synthesize and store
    ///
    /// Validation failures are reported before any backend is called. Any
    /// failure left after the synthesizer's own fallback is reported as
    /// [`ApplicationError::SynthesisFailed`]; timeouts keep their kind.
    #[instrument(skip(self, request), fields(
        text_len = request.text.as_deref().map_or(0, str::len),
        language = request.language.as_deref().unwrap_or_default(),
        voice = request.voice.as_deref().unwrap_or_default()
    ))]
    pub async fn generate(
        &self,
        request: GenerateAudioRequest,
    ) -> Result<AudioArtifact, ApplicationError> {
        let (text, language) = match (non_blank(request.text), non_blank(request.language)) {
            (Some(text), Some(language)) => (text, language),
            _ => {
                return Err(ApplicationError::InvalidRequest(
                    "Missing text or language".to_string(),
                ));
            },
        };
        let language = LanguageCode::new(language)?;
        let voice = VoiceSelection::parse(request.voice.as_deref());

        let started = Instant::now();
        let audio = self
            .synthesizer
            .synthesize(&text, &language, &voice)
            .await
            .map_err(into_synthesis_failure)?;

        let artifact = self
            .file_store
            .store_artifact(audio)
            .await
            .map_err(into_synthesis_failure)?;

        info!(
            file = artifact.file_name(),
            format = ?artifact.format(),
            elapsed_ms = started.elapsed().as_millis(),
            "Audio artifact written"
        );
        Ok(artifact)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn into_synthesis_failure(err: ApplicationError) -> ApplicationError {
    warn!(error = %err, "Audio generation failed");
    match err {
        ApplicationError::Timeout(_) | ApplicationError::SynthesisFailed(_) => err,
        other => ApplicationError::SynthesisFailed(other.to_string()),
    }
}
