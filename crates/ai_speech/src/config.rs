//! Configuration for speech synthesis backends

use serde::{Deserialize, Serialize};

/// Which implementation serves the standard (language-driven) voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StandardBackend {
    /// Google Translate text-to-speech endpoint (MP3)
    #[default]
    Google,
    /// Writes the text itself as a `.txt` artifact, for offline use
    Placeholder,
}

/// Speech synthesis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default)]
    pub standard_backend: StandardBackend,

    #[serde(default)]
    pub google: GoogleTtsConfig,

    #[serde(default)]
    pub gemini: GeminiTtsConfig,
}

/// Google Translate TTS endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTtsConfig {
    #[serde(default = "default_google_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_google_timeout_ms")]
    pub timeout_ms: u64,

    /// The endpoint rejects longer inputs
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

fn default_google_base_url() -> String {
    "https://translate.google.com".to_string()
}

const fn default_google_timeout_ms() -> u64 {
    30_000
}

const fn default_max_chunk_chars() -> usize {
    200
}

impl Default for GoogleTtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_google_base_url(),
            timeout_ms: default_google_timeout_ms(),
            max_chunk_chars: default_max_chunk_chars(),
        }
    }
}

/// Gemini named-voice TTS
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiTtsConfig {
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_gemini_timeout_ms")]
    pub timeout_ms: u64,

    /// Sample rate assumed for raw PCM when the MIME type omits it
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

const fn default_gemini_timeout_ms() -> u64 {
    90_000
}

const fn default_sample_rate() -> u32 {
    24_000
}

impl Default for GeminiTtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            timeout_ms: default_gemini_timeout_ms(),
            sample_rate: default_sample_rate(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if a value is out of range.
    pub fn validate(&self) -> Result<(), String> {
        if self.google.max_chunk_chars == 0 {
            return Err("google.max_chunk_chars must be greater than zero".to_string());
        }
        if self.gemini.sample_rate == 0 {
            return Err("gemini.sample_rate must be greater than zero".to_string());
        }
        if self.google.timeout_ms == 0 || self.gemini.timeout_ms == 0 {
            return Err("timeouts must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SpeechConfig::default();
        assert_eq!(config.standard_backend, StandardBackend::Google);
        assert_eq!(config.google.max_chunk_chars, 200);
        assert_eq!(config.gemini.model, "gemini-2.5-flash-preview-tts");
        assert_eq!(config.gemini.sample_rate, 24_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn backend_deserializes_lowercase() {
        let config: SpeechConfig =
            toml::from_str("standard_backend = \"placeholder\"").unwrap();
        assert_eq!(config.standard_backend, StandardBackend::Placeholder);
    }

    #[test]
    fn zero_chunk_size_is_invalid() {
        let mut config = SpeechConfig::default();
        config.google.max_chunk_chars = 0;
        assert!(config.validate().is_err());
    }
}
