//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Document extension outside the extractable set
    #[error("Unsupported file format '{extension}'. Supported formats: {supported}")]
    UnsupportedFormat {
        extension: String,
        supported: String,
    },

    /// Missing or malformed request field
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A remote model or service signalled a rate limit
    #[error("{0}")]
    RateLimited(String),

    /// Text extraction failed for a supported format
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Summarization backend failed
    #[error("Summarization failed: {0}")]
    SummarizationFailed(String),

    /// Translation backend failed
    #[error("Translation failed: {0}")]
    TranslationFailed(String),

    /// Speech synthesis failed after fallback
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// An outbound call exceeded its deadline
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Upload or artifact storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited(_) | Self::Timeout(_))
    }

    /// Whether the caller can fix the request
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. } | Self::InvalidRequest(_))
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnsupportedFormat {
                extension,
                supported,
            } => Self::UnsupportedFormat {
                extension,
                supported,
            },
            other => Self::InvalidRequest(other.to_string()),
        }
    }
}
