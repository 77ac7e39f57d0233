//! Summary verbosity mode and its length policy

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound for the minimum summary length
const MIN_LENGTH_FLOOR: u32 = 30;

/// Requested summary verbosity
///
/// Parsing never fails: an unknown mode string maps to
/// [`SummaryMode::Unrecognized`], which carries the default target length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// Short bullet-point summary
    Quick,
    /// One-paragraph summary
    #[default]
    Standard,
    /// Detailed summary with takeaways and section breakdowns
    Deep,
    /// Any mode string outside the known set
    Unrecognized,
}

/// Output length bounds for the local summarization model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthPolicy {
    pub max_length: u32,
    pub min_length: u32,
}

impl LengthPolicy {
    /// Build a policy from a target length, flooring the minimum at
    /// `max(30, target / 3)`
    #[must_use]
    pub const fn from_target(target: u32) -> Self {
        let third = target / 3;
        let min_length = if third > MIN_LENGTH_FLOOR {
            third
        } else {
            MIN_LENGTH_FLOOR
        };
        Self {
            max_length: target,
            min_length,
        }
    }
}

impl SummaryMode {
    /// Parse a mode leniently
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "quick" => Self::Quick,
            "standard" => Self::Standard,
            "deep" => Self::Deep,
            _ => Self::Unrecognized,
        }
    }

    /// Target summary length in model output units
    #[must_use]
    pub const fn target_length(self) -> u32 {
        match self {
            Self::Quick => 120,
            Self::Standard => 320,
            Self::Deep => 650,
            Self::Unrecognized => 180,
        }
    }

    /// Length bounds derived from the target length
    #[must_use]
    pub const fn length_policy(self) -> LengthPolicy {
        LengthPolicy::from_target(self.target_length())
    }

    /// Instruction prefix for the generative summarization strategy
    #[must_use]
    pub const fn instruction(self) -> &'static str {
        match self {
            Self::Quick => "Summarize the following text in 3-5 concise bullet points:",
            Self::Deep => {
                "Provide a detailed summary of the following text, including key takeaways and section breakdowns:"
            },
            Self::Standard | Self::Unrecognized => {
                "Provide a standard 1-paragraph summary of the following text:"
            },
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Standard => "standard",
            Self::Deep => "deep",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SummaryMode {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_lengths() {
        assert_eq!(SummaryMode::Quick.target_length(), 120);
        assert_eq!(SummaryMode::Standard.target_length(), 320);
        assert_eq!(SummaryMode::Deep.target_length(), 650);
        assert_eq!(SummaryMode::Unrecognized.target_length(), 180);
    }

    #[test]
    fn min_length_floor() {
        assert_eq!(SummaryMode::Quick.length_policy().min_length, 40);
        assert_eq!(SummaryMode::Standard.length_policy().min_length, 106);
        assert_eq!(SummaryMode::Deep.length_policy().min_length, 216);
        assert_eq!(SummaryMode::Unrecognized.length_policy().min_length, 60);
        assert_eq!(LengthPolicy::from_target(60).min_length, 30);
    }

    #[test]
    fn unknown_mode_falls_back() {
        assert_eq!(SummaryMode::parse("verbose"), SummaryMode::Unrecognized);
        assert_eq!(SummaryMode::parse(""), SummaryMode::Unrecognized);
    }

    #[test]
    fn parse_trims_and_lowercases() {
        assert_eq!(SummaryMode::parse(" Quick "), SummaryMode::Quick);
        assert_eq!(SummaryMode::parse("DEEP"), SummaryMode::Deep);
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(SummaryMode::default(), SummaryMode::Standard);
    }

    #[test]
    fn instructions() {
        assert!(SummaryMode::Quick.instruction().contains("3-5 concise bullet points"));
        assert!(SummaryMode::Standard.instruction().contains("1-paragraph"));
        assert!(SummaryMode::Deep.instruction().contains("section breakdowns"));
        assert_eq!(
            SummaryMode::Unrecognized.instruction(),
            SummaryMode::Standard.instruction()
        );
    }
}
