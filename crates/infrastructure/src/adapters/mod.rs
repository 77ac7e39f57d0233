//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod extraction_adapter;
mod local_file_store;
mod speech_adapter;
mod summarizer_adapter;
mod translation_adapter;

pub use extraction_adapter::ExtractionAdapter;
pub use local_file_store::LocalFileStore;
pub use speech_adapter::SpeechAdapter;
pub use summarizer_adapter::SummarizerAdapter;
pub use translation_adapter::TranslationAdapter;
