//! Summarization on top of the Gemini client

use std::sync::Arc;

use async_trait::async_trait;
use domain::{LanguageCode, SummaryMode};
use tracing::instrument;

use super::GeminiClient;
use crate::error::InferenceError;
use crate::ports::{SummarizationEngine, SummaryRequest};

/// Build the prompt: mode instruction, optional language directive, blank
/// line, then the text
pub fn build_prompt(mode: SummaryMode, language: &LanguageCode, text: &str) -> String {
    let mut intro = mode.instruction().to_string();
    if !language.is_default() {
        intro.push_str(&format!(" (Please respond in {language})"));
    }
    format!("{intro}\n\n{text}")
}

/// Summarizer backed by Gemini
#[derive(Debug, Clone)]
pub struct GeminiSummarizationEngine {
    client: Arc<GeminiClient>,
}

impl GeminiSummarizationEngine {
    pub const fn new(client: Arc<GeminiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SummarizationEngine for GeminiSummarizationEngine {
    #[instrument(skip(self, request), fields(mode = %request.mode, language = %request.language))]
    async fn summarize(&self, request: SummaryRequest) -> Result<String, InferenceError> {
        let prompt = build_prompt(request.mode, &request.language, &request.text);
        self.client.generate_text(&prompt).await
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_has_no_directive() {
        let prompt = build_prompt(SummaryMode::Quick, &LanguageCode::default(), "Body");
        assert_eq!(
            prompt,
            "Summarize the following text in 3-5 concise bullet points:\n\nBody"
        );
    }

    #[test]
    fn other_language_appends_directive() {
        let prompt = build_prompt(SummaryMode::Deep, &LanguageCode::new("fr").unwrap(), "Texte");
        assert!(prompt.starts_with("Provide a detailed summary"));
        assert!(prompt.contains("section breakdowns: (Please respond in fr)\n\nTexte"));
    }

    #[test]
    fn unrecognized_mode_uses_standard_instruction() {
        let prompt = build_prompt(SummaryMode::Unrecognized, &LanguageCode::default(), "x");
        assert!(prompt.starts_with("Provide a standard 1-paragraph summary"));
    }
}
