//! Document format value object

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A document format the extraction stage can read
///
/// Dispatch is keyed on the file extension only; content is never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Pptx,
    Txt,
    Md,
    Html,
    Htm,
    Csv,
}

impl DocumentFormat {
    /// Parse a format from a file extension (with or without leading dot, any case)
    pub fn from_extension(extension: &str) -> Result<Self, DomainError> {
        let normalized = extension.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "pptx" => Ok(Self::Pptx),
            "txt" => Ok(Self::Txt),
            "md" => Ok(Self::Md),
            "html" => Ok(Self::Html),
            "htm" => Ok(Self::Htm),
            "csv" => Ok(Self::Csv),
            _ => Err(DomainError::unsupported_format(normalized)),
        }
    }

    /// Parse a format from the extension of a path
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }

    /// Canonical extension without a leading dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Pptx => "pptx",
            Self::Txt => "txt",
            Self::Md => "md",
            Self::Html => "html",
            Self::Htm => "htm",
            Self::Csv => "csv",
        }
    }

    /// Whether the format is plain text read verbatim
    #[must_use]
    pub const fn is_plain_text(self) -> bool {
        matches!(self, Self::Txt | Self::Md)
    }

    /// Whether the format is markup whose visible text must be extracted
    #[must_use]
    pub const fn is_markup(self) -> bool {
        matches!(self, Self::Html | Self::Htm)
    }

    /// All supported formats in display order
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Pdf,
            Self::Docx,
            Self::Pptx,
            Self::Txt,
            Self::Md,
            Self::Html,
            Self::Htm,
            Self::Csv,
        ]
    }

    /// Comma separated list of supported extensions
    #[must_use]
    pub fn supported_list() -> String {
        Self::all()
            .iter()
            .map(|format| format.extension())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
