//! Value Objects - Immutable, identity-less domain primitives

mod artifact_id;
mod document_format;
mod language;
mod summary_mode;
mod summary_strategy;
mod voice;

pub use artifact_id::ArtifactId;
pub use document_format::DocumentFormat;
pub use language::{DEFAULT_LANGUAGE, LanguageCode, OFFERED_LANGUAGES};
pub use summary_mode::{LengthPolicy, SummaryMode};
pub use summary_strategy::SummaryStrategy;
pub use voice::{NAMED_VOICES, STANDARD_VOICE, VoiceSelection};
