//! API error handling
//!
//! Every error leaves the server as `{"error": <message>, "code": <code>}`.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Upstream service failed: {0}")]
    BadGateway(String),

    #[error("Upstream service timed out: {0}")]
    GatewayTimeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    #[schema(example = "No file part")]
    pub error: String,
    /// Machine-readable error code
    #[schema(example = "bad_request")]
    pub code: String,
}

impl ApiError {
    const fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Self::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            Self::RateLimited(_) => (StatusCode::TOO_MANY_REQUESTS, "rate_limited"),
            Self::BadGateway(_) => (StatusCode::BAD_GATEWAY, "upstream_failed"),
            Self::GatewayTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, "upstream_timeout"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    fn message(self) -> String {
        match self {
            Self::BadRequest(msg)
            | Self::PayloadTooLarge(msg)
            | Self::RateLimited(msg)
            | Self::BadGateway(msg)
            | Self::GatewayTimeout(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.message();

        if status.is_server_error() {
            error!(status = %status, code, error = %message, "Request failed");
        } else {
            warn!(status = %status, code, error = %message, "Request rejected");
        }

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidRequest(msg) => Self::BadRequest(msg),
            unsupported @ ApplicationError::UnsupportedFormat { .. } => {
                Self::BadRequest(unsupported.to_string())
            },
            extraction @ ApplicationError::Extraction(_) => {
                Self::BadRequest(extraction.to_string())
            },
            ApplicationError::RateLimited(msg) => Self::RateLimited(msg),
            upstream @ (ApplicationError::SummarizationFailed(_)
            | ApplicationError::TranslationFailed(_)) => Self::BadGateway(upstream.to_string()),
            timeout @ ApplicationError::Timeout(_) => Self::GatewayTimeout(timeout.to_string()),
            synthesis @ ApplicationError::SynthesisFailed(_) => {
                Self::Internal(synthesis.to_string())
            },
            ApplicationError::Configuration(msg) => Self::Internal(msg),
            storage @ ApplicationError::Storage(_) => Self::Internal(storage.to_string()),
            ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
