//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// File extension outside the set of extractable formats
    #[error("Unsupported file format '{extension}'. Supported formats: {supported}")]
    UnsupportedFormat {
        extension: String,
        supported: String,
    },

    /// Unknown summarization strategy selector
    #[error("Invalid summarization strategy: {0}")]
    InvalidStrategy(String),

    /// Language code that cannot be used as a target
    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an unsupported format error listing every accepted extension
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
            supported: crate::DocumentFormat::supported_list(),
        }
    }
}
