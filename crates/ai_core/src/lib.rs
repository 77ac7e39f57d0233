//! AI Core - Summarization engines
//!
//! Two interchangeable strategies behind [`SummarizationEngine`]: a local
//! pretrained summarization model reached over HTTP, and Gemini's
//! `generateContent` API.

pub mod config;
pub mod error;
pub mod gemini;
pub mod local;
pub mod ports;

pub use config::{GeminiConfig, LocalModelConfig, SummarizerConfig};
pub use error::{InferenceError, RATE_LIMIT_HINT};
pub use gemini::{API_KEY_VAR, GeminiClient, GeminiSummarizationEngine};
pub use local::LocalSummarizationEngine;
pub use ports::{SummarizationEngine, SummaryRequest};
