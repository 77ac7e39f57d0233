//! Extraction errors

use domain::DomainError;
use thiserror::Error;

/// Errors raised while reading a document
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Extension outside the supported set
    #[error("Unsupported file type: {extension}. Supported: {supported}")]
    UnsupportedFormat {
        extension: String,
        supported: String,
    },

    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Office container is not a readable zip or misses a part
    #[error("Invalid archive: {0}")]
    Archive(String),

    /// Malformed XML inside an Office container
    #[error("Invalid XML: {0}")]
    Xml(String),

    /// PDF could not be parsed
    #[error("Invalid PDF: {0}")]
    Pdf(String),

    /// CSV could not be parsed
    #[error("Invalid CSV: {0}")]
    Csv(String),
}

impl From<DomainError> for ExtractionError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnsupportedFormat {
                extension,
                supported,
            } => Self::UnsupportedFormat {
                extension,
                supported,
            },
            other => Self::Archive(other.to_string()),
        }
    }
}
