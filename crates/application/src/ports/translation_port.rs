//! Translation port

use async_trait::async_trait;
use domain::LanguageCode;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for a translation backend; the source language is auto-detected
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranslationPort: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<String, ApplicationError>;
}
