//! Application services - Use case implementations

mod audio_service;
mod document_summary_service;

pub use audio_service::{AudioService, GenerateAudioRequest};
pub use document_summary_service::{DocumentSummaryService, SummarizeRequest, Summarizers};
