//! Speech synthesis provider implementations

pub mod fallback;
pub mod gemini;
pub mod google;
pub mod placeholder;

pub use fallback::FallbackSpeechProvider;
pub use gemini::GeminiTtsProvider;
pub use google::GoogleTtsProvider;
pub use placeholder::PlaceholderTtsProvider;
