//! Result of the summarize pipeline

use serde::{Deserialize, Serialize};

use crate::{LanguageCode, StageTimings};

/// Original and translated summary of one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Summary in the default language
    pub original: String,
    /// Summary in the requested language; equals `original` when no
    /// translation was needed
    pub translated: String,
    pub language: LanguageCode,
    pub timings: StageTimings,
}

impl DocumentSummary {
    /// Whether the translated text differs from the original
    #[must_use]
    pub fn was_translated(&self) -> bool {
        self.original != self.translated
    }
}
