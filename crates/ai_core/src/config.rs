//! Configuration for summarization engines

use serde::{Deserialize, Serialize};

/// Configuration for both summarization strategies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Local pretrained summarization model
    #[serde(default)]
    pub local_model: LocalModelConfig,

    /// Remote generative model
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Local summarization model served over HTTP (Hugging Face inference API shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalModelConfig {
    /// Base URL of the model server
    #[serde(default = "default_local_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_local_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_local_timeout_ms")]
    pub timeout_ms: u64,

    /// Input is cut to this many characters before it is sent
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

fn default_local_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_local_model() -> String {
    "sshleifer/distilbart-cnn-12-6".to_string()
}

const fn default_local_timeout_ms() -> u64 {
    120_000 // CPU inference on long inputs is slow
}

const fn default_max_input_chars() -> usize {
    4000
}

impl Default for LocalModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_local_base_url(),
            model: default_local_model(),
            timeout_ms: default_local_timeout_ms(),
            max_input_chars: default_max_input_chars(),
        }
    }
}

/// Gemini generateContent endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_gemini_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

const fn default_gemini_timeout_ms() -> u64 {
    60_000
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            timeout_ms: default_gemini_timeout_ms(),
        }
    }
}
