//! Extraction adapter - Implements TextExtractionPort on the blocking pool

use std::path::Path;
use std::time::{Duration, Instant};

use application::{error::ApplicationError, ports::TextExtractionPort};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::ExtractionConfig;
use crate::extraction::{ExtractionError, ExtractionOptions, detect_and_extract_text};

/// Runs the blocking document readers under a deadline
#[derive(Debug, Clone)]
pub struct ExtractionAdapter {
    options: ExtractionOptions,
    timeout: Duration,
}

impl ExtractionAdapter {
    pub const fn new(options: ExtractionOptions, timeout: Duration) -> Self {
        Self { options, timeout }
    }

    pub const fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(
            ExtractionOptions {
                csv_max_rows: config.csv_max_rows,
            },
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn map_error(err: ExtractionError) -> ApplicationError {
        match err {
            ExtractionError::UnsupportedFormat {
                extension,
                supported,
            } => ApplicationError::UnsupportedFormat {
                extension,
                supported,
            },
            other => ApplicationError::Extraction(other.to_string()),
        }
    }
}

#[async_trait]
impl TextExtractionPort for ExtractionAdapter {
    #[instrument(skip(self), fields(path = %path.display()))]
    async fn extract_text(&self, path: &Path) -> Result<String, ApplicationError> {
        let start = Instant::now();
        let owned_path = path.to_path_buf();
        let options = self.options;

        let text = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || detect_and_extract_text(&owned_path, &options)),
        )
        .await
        .map_err(|_| {
            ApplicationError::Timeout(format!(
                "Extraction exceeded {}s",
                self.timeout.as_secs()
            ))
        })?
        .map_err(|e| ApplicationError::Internal(format!("Extraction task failed: {e}")))?
        .map_err(Self::map_error)?;

        debug!(
            chars = text.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Text extracted"
        );
        Ok(text)
    }
}
