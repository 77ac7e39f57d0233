//! Summarizer port - Condenses text according to a verbosity mode

use async_trait::async_trait;
use domain::{LanguageCode, SummaryMode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for a summarization backend
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SummarizerPort: Send + Sync {
    /// Summarize `text` at the verbosity of `mode`
    ///
    /// Backends that cannot write in other languages ignore `language`.
    async fn summarize(
        &self,
        text: &str,
        mode: SummaryMode,
        language: &LanguageCode,
    ) -> Result<String, ApplicationError>;

    /// Backend name for logs
    fn name(&self) -> &'static str;
}
