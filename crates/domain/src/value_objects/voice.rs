//! Voice selection for speech synthesis

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel voice name that selects the language-driven standard backend
pub const STANDARD_VOICE: &str = "standard";

/// Prebuilt named voices offered to clients
pub const NAMED_VOICES: [&str; 5] = ["Puck", "Charon", "Kore", "Fenrir", "Aoede"];

/// Which voice a synthesis request asked for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum VoiceSelection {
    /// Language-driven standard voice
    #[default]
    Standard,
    /// Named voice of the generative backend
    Named(String),
}

impl VoiceSelection {
    /// Parse a voice selector; blank input and the sentinel both mean standard
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Standard,
            Some(name) if name.eq_ignore_ascii_case(STANDARD_VOICE) => Self::Standard,
            Some(name) => Self::Named(name.to_string()),
        }
    }

    #[must_use]
    pub const fn is_standard(&self) -> bool {
        matches!(self, Self::Standard)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => STANDARD_VOICE,
            Self::Named(name) => name,
        }
    }

    /// Every voice offered to clients, standard first
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        std::iter::once(Self::Standard)
            .chain(NAMED_VOICES.iter().map(|name| Self::Named((*name).to_string())))
            .collect()
    }
}

impl From<String> for VoiceSelection {
    fn from(value: String) -> Self {
        Self::parse(Some(&value))
    }
}

impl From<VoiceSelection> for String {
    fn from(voice: VoiceSelection) -> Self {
        voice.as_str().to_string()
    }
}

impl fmt::Display for VoiceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
