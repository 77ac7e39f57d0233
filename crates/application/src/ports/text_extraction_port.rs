//! Text extraction port - Turns a staged document into plain text

use std::path::Path;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for extracting plain text from a document on disk
///
/// The format is taken from the path's extension.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextExtractionPort: Send + Sync {
    /// Extract the document's text as a single linear string
    async fn extract_text(&self, path: &Path) -> Result<String, ApplicationError>;
}
