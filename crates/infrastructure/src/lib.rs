//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: document extraction,
//! the summarization and translation backends, speech synthesis and the
//! local upload/result directories. Also owns configuration loading and the
//! tracing subscriber.

pub mod adapters;
pub mod config;
pub mod extraction;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, ExtractionConfig, GEMINI_API_KEY_VAR, GeminiCredentials, ServerConfig,
    StorageConfig,
};
pub use extraction::{ExtractionError, ExtractionOptions, detect_and_extract_text};
pub use telemetry::{DEFAULT_LOG_FILTER, LogFormat, TelemetryError, init_telemetry};
