//! Entities produced by the pipeline

mod audio_artifact;
mod document_summary;
mod stage_timings;

pub use audio_artifact::{ARTIFACT_PREFIX, AudioArtifact, AudioFormat, RESULTS_URL_PREFIX};
pub use document_summary::DocumentSummary;
pub use stage_timings::{StageTimings, rounded_seconds};
