//! AI Speech - Text-to-Speech backends
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` defines the [`TextToSpeech`] trait
//! - `providers` contains the backends and the voice-routing fallback
//!
//! # Supported Providers
//!
//! - Google Translate TTS (standard, language-driven voice, MP3)
//! - Gemini TTS (named prebuilt voices, WAV)
//! - Placeholder (text written as `.txt`, no network)

pub mod config;
pub mod converter;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

use std::sync::Arc;

use secrecy::SecretString;

pub use config::{GeminiTtsConfig, GoogleTtsConfig, SpeechConfig, StandardBackend};
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::{
    FallbackSpeechProvider, GeminiTtsProvider, GoogleTtsProvider, PlaceholderTtsProvider,
};
pub use types::{AudioData, SpeechRequest};

/// Build the routing provider described by `config`
///
/// # Errors
///
/// Returns `SpeechError::Configuration` if the configuration is invalid or a
/// client cannot be built.
pub fn build_speech_provider(
    config: &SpeechConfig,
    gemini_api_key: Option<SecretString>,
) -> Result<FallbackSpeechProvider, SpeechError> {
    config.validate().map_err(SpeechError::Configuration)?;

    let standard: Arc<dyn TextToSpeech> = match config.standard_backend {
        StandardBackend::Google => Arc::new(GoogleTtsProvider::new(config.google.clone())?),
        StandardBackend::Placeholder => Arc::new(PlaceholderTtsProvider::new()),
    };
    let named: Arc<dyn TextToSpeech> =
        Arc::new(GeminiTtsProvider::new(config.gemini.clone(), gemini_api_key));

    Ok(FallbackSpeechProvider::new(standard, named))
}
