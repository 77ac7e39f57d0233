//! Document summary service - The summarize pipeline
//!
//! Sequences one request through:
//! 1. Stage the upload under a unique name
//! 2. Extract text (file removed right after)
//! 3. Summarize in the default language with the selected strategy
//! 4. Translate to the requested language, skipped for the default language

use std::{
    fmt,
    sync::Arc,
    time::{Duration, Instant},
};

use domain::{
    DocumentFormat, DocumentSummary, LanguageCode, StageTimings, SummaryMode, SummaryStrategy,
};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{FileStorePort, SummarizerPort, TextExtractionPort, TranslationPort},
};

/// One summarizer per strategy
#[derive(Clone)]
pub struct Summarizers {
    pub standard: Arc<dyn SummarizerPort>,
    pub gemini: Arc<dyn SummarizerPort>,
}

impl Summarizers {
    pub fn new(standard: Arc<dyn SummarizerPort>, gemini: Arc<dyn SummarizerPort>) -> Self {
        Self { standard, gemini }
    }

    /// Backend serving `strategy`
    pub fn for_strategy(&self, strategy: SummaryStrategy) -> &dyn SummarizerPort {
        match strategy {
            SummaryStrategy::Standard => self.standard.as_ref(),
            SummaryStrategy::Gemini => self.gemini.as_ref(),
        }
    }
}

impl fmt::Debug for Summarizers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarizers")
            .field("standard", &self.standard.name())
            .field("gemini", &self.gemini.name())
            .finish()
    }
}

/// Input of the summarize pipeline
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    /// Raw upload bytes
    pub content: Vec<u8>,
    /// Declared extension of the upload
    pub extension: String,
    pub mode: SummaryMode,
    /// Language of the translated summary
    pub language: LanguageCode,
    pub strategy: SummaryStrategy,
}

/// Service that turns an uploaded document into an original and a translated summary
pub struct DocumentSummaryService {
    file_store: Arc<dyn FileStorePort>,
    extractor: Arc<dyn TextExtractionPort>,
    summarizers: Summarizers,
    translator: Arc<dyn TranslationPort>,
}

impl fmt::Debug for DocumentSummaryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentSummaryService")
            .field("summarizers", &self.summarizers)
            .finish_non_exhaustive()
    }
}

impl DocumentSummaryService {
    pub fn new(
        file_store: Arc<dyn FileStorePort>,
        extractor: Arc<dyn TextExtractionPort>,
        summarizers: Summarizers,
        translator: Arc<dyn TranslationPort>,
    ) -> Self {
        Self {
            file_store,
            extractor,
            summarizers,
            translator,
        }
    }

    /// Run the full pipeline for one uploaded document
    #[instrument(skip(self, request), fields(
        size = request.content.len(),
        extension = %request.extension,
        mode = %request.mode,
        language = %request.language,
        strategy = %request.strategy
    ))]
    pub async fn summarize(
        &self,
        request: SummarizeRequest,
    ) -> Result<DocumentSummary, ApplicationError> {
        let started = Instant::now();

        // Rejected before anything touches the disk
        let format = DocumentFormat::from_extension(&request.extension)?;

        let (text, extraction) = self.extract(request.content, format).await?;
        if text.trim().is_empty() {
            return Err(ApplicationError::InvalidRequest(
                "Document contains no extractable text".to_string(),
            ));
        }

        let source_language = LanguageCode::default_language();
        let summarizer = self.summarizers.for_strategy(request.strategy);
        let stage = Instant::now();
        let original = summarizer
            .summarize(&text, request.mode, &source_language)
            .await
            .inspect_err(|e| warn!(backend = summarizer.name(), error = %e, "Summarization failed"))?;
        let summarization = stage.elapsed();
        debug!(
            backend = summarizer.name(),
            input_chars = text.chars().count(),
            summary_chars = original.chars().count(),
            "Summarization complete"
        );

        let (translated, translation) = self.translate(&original, &request.language).await?;

        let timings = StageTimings {
            extraction,
            summarization,
            translation,
            total: started.elapsed(),
        };
        info!(
            total_secs = timings.total_secs(),
            extraction_secs = timings.extraction_secs(),
            summarization_secs = timings.summarization_secs(),
            translation_secs = timings.translation_secs(),
            "Document summarized"
        );

        Ok(DocumentSummary {
            original,
            translated,
            language: request.language,
            timings,
        })
    }

    async fn extract(
        &self,
        content: Vec<u8>,
        format: DocumentFormat,
    ) -> Result<(String, Duration), ApplicationError> {
        let staged = self.file_store.stage_upload(content, format).await?;
        let stage = Instant::now();
        let result = self.extractor.extract_text(staged.path()).await;
        let elapsed = stage.elapsed();
        drop(staged);

        let text = result.inspect_err(|e| warn!(error = %e, "Extraction failed"))?;
        debug!(chars = text.chars().count(), "Extraction complete");
        Ok((text, elapsed))
    }

    async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<(String, Duration), ApplicationError> {
        if target.is_default() {
            return Ok((text.to_string(), Duration::ZERO));
        }
        let stage = Instant::now();
        let translated = self.translator.translate(text, target).await?;
        Ok((translated, stage.elapsed()))
    }
}
