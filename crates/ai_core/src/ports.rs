//! Port definitions for summarization engines

use async_trait::async_trait;
use domain::{LanguageCode, SummaryMode};

use crate::error::InferenceError;

/// Request for a summary
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub text: String,
    pub mode: SummaryMode,
    /// Language the summary should be written in, where the engine supports it
    pub language: LanguageCode,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>, mode: SummaryMode, language: LanguageCode) -> Self {
        Self {
            text: text.into(),
            mode,
            language,
        }
    }
}

/// Core summarization trait
#[async_trait]
pub trait SummarizationEngine: Send + Sync {
    /// Produce a summary for the request
    async fn summarize(&self, request: SummaryRequest) -> Result<String, InferenceError>;

    /// Engine name for logs
    fn name(&self) -> &'static str;
}
