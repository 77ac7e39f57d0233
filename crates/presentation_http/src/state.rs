//! Application state shared across handlers

use std::sync::Arc;

use application::{AudioService, DocumentSummaryService, FileStorePort};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Summarize pipeline
    pub summary_service: Arc<DocumentSummaryService>,
    /// Generate-audio pipeline
    pub audio_service: Arc<AudioService>,
    /// Upload/result directories, probed by the readiness check
    pub file_store: Arc<dyn FileStorePort>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("summary_service", &self.summary_service)
            .field("audio_service", &self.audio_service)
            .finish_non_exhaustive()
    }
}
