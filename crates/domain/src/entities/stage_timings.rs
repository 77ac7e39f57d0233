//! Wall-clock timings of the summarize pipeline stages

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-stage durations of one summarize request
///
/// Purely observational; nothing branches on these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StageTimings {
    pub extraction: Duration,
    pub summarization: Duration,
    pub translation: Duration,
    pub total: Duration,
}

/// Seconds rounded to two decimals
#[must_use]
pub fn rounded_seconds(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 100.0).round() / 100.0
}

impl StageTimings {
    #[must_use]
    pub fn extraction_secs(&self) -> f64 {
        rounded_seconds(self.extraction)
    }

    #[must_use]
    pub fn summarization_secs(&self) -> f64 {
        rounded_seconds(self.summarization)
    }

    #[must_use]
    pub fn translation_secs(&self) -> f64 {
        rounded_seconds(self.translation)
    }

    #[must_use]
    pub fn total_secs(&self) -> f64 {
        rounded_seconds(self.total)
    }
}
