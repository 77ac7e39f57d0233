//! Translation adapter - Implements TranslationPort using integration_translate

use std::sync::Arc;

use application::{error::ApplicationError, ports::TranslationPort};
use async_trait::async_trait;
use domain::LanguageCode;
use integration_translate::{
    GoogleTranslateClient, TranslateConfig, TranslateError, TranslationClient,
};
use tracing::{debug, instrument};

const RATE_LIMIT_MESSAGE: &str =
    "Translation rate limit exceeded. Please wait a moment and try again.";

/// Adapter for the machine translation service
pub struct TranslationAdapter {
    client: Arc<dyn TranslationClient>,
}

impl std::fmt::Debug for TranslationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationAdapter").finish_non_exhaustive()
    }
}

impl TranslationAdapter {
    /// Create with the Google Translate client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: TranslateConfig) -> Result<Self, ApplicationError> {
        let client = GoogleTranslateClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn new(client: Arc<dyn TranslationClient>) -> Self {
        Self { client }
    }

    /// Map integration translate error to application error
    fn map_error(err: TranslateError) -> ApplicationError {
        match err {
            TranslateError::RateLimitExceeded => {
                ApplicationError::RateLimited(RATE_LIMIT_MESSAGE.to_string())
            },
            TranslateError::Timeout(secs) => {
                ApplicationError::Timeout(format!("Translation did not answer within {secs}s"))
            },
            other => ApplicationError::TranslationFailed(other.to_string()),
        }
    }
}

#[async_trait]
impl TranslationPort for TranslationAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len(), target = %target))]
    async fn translate(&self, text: &str, target: &LanguageCode) -> Result<String, ApplicationError> {
        let translated = self
            .client
            .translate(text, target.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(translated_len = translated.len(), "Translation complete");
        Ok(translated)
    }
}
