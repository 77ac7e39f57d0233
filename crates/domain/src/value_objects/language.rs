//! Language code value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Language every summary is first produced in
pub const DEFAULT_LANGUAGE: &str = "en";

/// Target languages offered to clients besides the default
pub const OFFERED_LANGUAGES: [&str; 7] = ["en", "es", "fr", "de", "it", "pt", "hi"];

/// A BCP-47-ish language code such as `en`, `fr` or `zh-CN`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parse and validate a language code
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into().trim().to_string();
        let valid = !code.is_empty()
            && code.len() <= 12
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(code))
        } else {
            Err(DomainError::InvalidLanguage(code))
        }
    }

    /// The default source language
    #[must_use]
    pub fn default_language() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }

    /// Whether this is the language summaries are produced in
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0.eq_ignore_ascii_case(DEFAULT_LANGUAGE)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::default_language()
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_codes() {
        for code in ["en", "fr", "zh-CN", "pt_BR"] {
            assert!(LanguageCode::new(code).is_ok(), "{code} should be valid");
        }
    }

    #[test]
    fn rejects_blank_and_garbage() {
        assert!(LanguageCode::new("").is_err());
        assert!(LanguageCode::new("   ").is_err());
        assert!(LanguageCode::new("en; drop").is_err());
        assert!(LanguageCode::new("a".repeat(13)).is_err());
    }

    #[test]
    fn trims_input() {
        assert_eq!(LanguageCode::new(" fr ").unwrap().as_str(), "fr");
    }

    #[test]
    fn default_detection_ignores_case() {
        assert!(LanguageCode::new("EN").unwrap().is_default());
        assert!(LanguageCode::default().is_default());
        assert!(!LanguageCode::new("de").unwrap().is_default());
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<LanguageCode>("\"fr\"").is_ok());
        assert!(serde_json::from_str::<LanguageCode>("\"\"").is_err());
    }
}
