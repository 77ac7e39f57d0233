//! Inference errors

use thiserror::Error;

/// Message shown when the generative model refuses work because of quota
pub const RATE_LIMIT_HINT: &str = "Gemini API rate limit exceeded. Please wait a moment and try again, or use Standard (DistilBART) mode.";

/// Errors that can occur during summarization
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the model server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the model server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Vendor rate limit or quota exhaustion
    #[error("{0}")]
    RateLimited(String),

    /// Server returned an error status
    #[error("Server error: {0}")]
    ServerError(String),

    /// Credential for a remote model is not configured
    #[error("{0} not found in environment variables.")]
    MissingApiKey(&'static str),
}

impl InferenceError {
    /// Map a transport error, reporting timeouts with the configured deadline
    pub fn from_reqwest(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }

    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_message() {
        let err = InferenceError::MissingApiKey("GEMINI_API_KEY");
        assert_eq!(
            err.to_string(),
            "GEMINI_API_KEY not found in environment variables."
        );
    }

    #[test]
    fn rate_limit_is_detectable() {
        assert!(InferenceError::RateLimited(RATE_LIMIT_HINT.into()).is_rate_limited());
        assert!(!InferenceError::Timeout(10).is_rate_limited());
    }

    #[test]
    fn timeout_message() {
        assert_eq!(
            InferenceError::Timeout(5000).to_string(),
            "Inference timeout after 5000ms"
        );
    }
}
