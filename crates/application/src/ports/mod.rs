//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod file_store_port;
mod speech_synthesis_port;
mod summarizer_port;
mod text_extraction_port;
mod translation_port;

#[cfg(test)]
pub use file_store_port::MockFileStorePort;
pub use file_store_port::{FileStorePort, StagedDocument};
#[cfg(test)]
pub use speech_synthesis_port::MockSpeechSynthesisPort;
pub use speech_synthesis_port::{SpeechSynthesisPort, SynthesizedAudio};
#[cfg(test)]
pub use summarizer_port::MockSummarizerPort;
pub use summarizer_port::SummarizerPort;
#[cfg(test)]
pub use text_extraction_port::MockTextExtractionPort;
pub use text_extraction_port::TextExtractionPort;
#[cfg(test)]
pub use translation_port::MockTranslationPort;
pub use translation_port::TranslationPort;
