//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `storage`: upload/result directories and extraction limits
//!
//! Backend sections reuse the config types of their crates.

mod server;
mod storage;

use ai_core::SummarizerConfig;
use ai_speech::SpeechConfig;
use integration_translate::TranslateConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use server::ServerConfig;
pub use storage::{ExtractionConfig, StorageConfig};

/// Environment variable consulted when no Gemini key is configured
pub const GEMINI_API_KEY_VAR: &str = ai_core::API_KEY_VAR;

/// Credentials shared by the Gemini summarizer and Gemini TTS
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiCredentials {
    /// Sensitive - uses `SecretString` for zeroization
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upload and result directories
    #[serde(default)]
    pub storage: StorageConfig,

    /// Extraction limits
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Local model and Gemini summarizers
    #[serde(default)]
    pub summarizer: SummarizerConfig,

    /// Translation backend
    #[serde(default)]
    pub translate: TranslateConfig,

    /// Text-to-speech backends
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Gemini credentials
    #[serde(default)]
    pub gemini: GeminiCredentials,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config.toml` and the
    /// environment (e.g., `DOC2PODCAST_SERVER__PORT=8080`)
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed into the config types.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("DOC2PODCAST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.resolve_gemini_key(std::env::var(GEMINI_API_KEY_VAR).ok());
        Ok(config)
    }

    /// Fill the Gemini key from `fallback` when none is configured
    ///
    /// Blank values count as absent on both sides.
    pub fn resolve_gemini_key(&mut self, fallback: Option<String>) {
        let configured = self
            .gemini
            .api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty());
        if configured {
            return;
        }

        self.gemini.api_key = fallback
            .filter(|value| !value.trim().is_empty())
            .map(SecretString::from);
        if self.gemini.api_key.is_some() {
            debug!("Loaded Gemini API key from {GEMINI_API_KEY_VAR}");
        }
    }

    /// The Gemini key, if any
    #[must_use]
    pub fn gemini_api_key(&self) -> Option<SecretString> {
        self.gemini.api_key.clone()
    }

    /// Check cross-field constraints that serde defaults cannot express
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.max_upload_bytes == 0 {
            return Err("server.max_upload_bytes must be greater than 0".to_string());
        }
        if self.extraction.timeout_secs == 0 {
            return Err("extraction.timeout_secs must be greater than 0".to_string());
        }
        if self.storage.uploads_dir == self.storage.results_dir {
            return Err("storage.uploads_dir and storage.results_dir must differ".to_string());
        }
        if self.translate.max_chunk_chars == 0 {
            return Err("translate.max_chunk_chars must be greater than 0".to_string());
        }
        if self.summarizer.local_model.max_input_chars == 0 {
            return Err(
                "summarizer.local_model.max_input_chars must be greater than 0".to_string(),
            );
        }
        self.speech.validate()
    }
}
