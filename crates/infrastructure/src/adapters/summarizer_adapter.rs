//! Summarizer adapter - Implements SummarizerPort using ai_core

use std::sync::Arc;
use std::time::Instant;

use ai_core::{InferenceError, SummarizationEngine, SummaryRequest};
use application::{error::ApplicationError, ports::SummarizerPort};
use async_trait::async_trait;
use domain::{LanguageCode, SummaryMode};
use tracing::{debug, instrument};

/// Adapter for one summarization engine
#[derive(Clone)]
pub struct SummarizerAdapter {
    engine: Arc<dyn SummarizationEngine>,
}

impl std::fmt::Debug for SummarizerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerAdapter")
            .field("engine", &self.engine.name())
            .finish()
    }
}

impl SummarizerAdapter {
    pub fn new(engine: Arc<dyn SummarizationEngine>) -> Self {
        Self { engine }
    }

    /// Convert ai_core error to application error
    fn map_error(e: InferenceError) -> ApplicationError {
        match e {
            InferenceError::RateLimited(hint) => ApplicationError::RateLimited(hint),
            InferenceError::Timeout(ms) => {
                ApplicationError::Timeout(format!("Summarizer did not answer within {ms}ms"))
            },
            missing @ InferenceError::MissingApiKey(_) => {
                ApplicationError::Configuration(missing.to_string())
            },
            other => ApplicationError::SummarizationFailed(other.to_string()),
        }
    }
}

#[async_trait]
impl SummarizerPort for SummarizerAdapter {
    #[instrument(skip(self, text), fields(engine = self.engine.name(), text_len = text.len()))]
    async fn summarize(
        &self,
        text: &str,
        mode: SummaryMode,
        language: &LanguageCode,
    ) -> Result<String, ApplicationError> {
        let start = Instant::now();

        let summary = self
            .engine
            .summarize(SummaryRequest::new(text, mode, language.clone()))
            .await
            .map_err(Self::map_error)?;

        debug!(
            summary_len = summary.len(),
            latency_ms = start.elapsed().as_millis(),
            "Summary generated"
        );
        Ok(summary)
    }

    fn name(&self) -> &'static str {
        self.engine.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEngine(fn() -> Result<String, InferenceError>);

    #[async_trait]
    impl SummarizationEngine for FixedEngine {
        async fn summarize(&self, _request: SummaryRequest) -> Result<String, InferenceError> {
            (self.0)()
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    async fn run(result: fn() -> Result<String, InferenceError>) -> Result<String, ApplicationError> {
        SummarizerAdapter::new(Arc::new(FixedEngine(result)))
            .summarize("text", SummaryMode::Quick, &LanguageCode::default())
            .await
    }

    #[tokio::test]
    async fn passes_summary_through() {
        assert_eq!(run(|| Ok("short".to_string())).await.unwrap(), "short");
    }

    #[tokio::test]
    async fn rate_limit_keeps_hint() {
        let err = run(|| Err(InferenceError::RateLimited("wait".to_string())))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::RateLimited(ref m) if m == "wait"));
    }

    #[tokio::test]
    async fn missing_key_is_configuration() {
        let err = run(|| Err(InferenceError::MissingApiKey("GEMINI_API_KEY")))
            .await
            .unwrap_err();
        match err {
            ApplicationError::Configuration(message) => {
                assert_eq!(message, "GEMINI_API_KEY not found in environment variables.");
            },
            other => panic!("Expected Configuration, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn timeout_and_server_errors() {
        assert!(matches!(
            run(|| Err(InferenceError::Timeout(10))).await.unwrap_err(),
            ApplicationError::Timeout(_)
        ));
        assert!(matches!(
            run(|| Err(InferenceError::ServerError("boom".to_string())))
                .await
                .unwrap_err(),
            ApplicationError::SummarizationFailed(_)
        ));
    }

    #[test]
    fn name_comes_from_engine() {
        let adapter = SummarizerAdapter::new(Arc::new(FixedEngine(|| Ok(String::new()))));
        assert_eq!(adapter.name(), "fixed");
    }
}
