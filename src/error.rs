//! Error types for the rate cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Rate Error Enum ==
/// Unified error type for the rate cache and its HTTP surface.
#[derive(Error, Debug)]
pub enum RateError {
    /// Malformed or unsupported ISO 4217 code
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream answered 429
    #[error("Upstream rate limit reached")]
    RateLimited,

    /// Upstream did not answer in time
    #[error("Upstream request timed out")]
    Timeout,

    /// Upstream failed or returned no usable data
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Upstream body could not be parsed
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RateError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RateError::InvalidCurrency(_) | RateError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RateError::NotFound(_) => StatusCode::NOT_FOUND,
            RateError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            RateError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            RateError::Upstream(_) | RateError::Decode(_) => StatusCode::BAD_GATEWAY,
            RateError::Config(_) | RateError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for RateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the rate cache.
pub type Result<T> = std::result::Result<T, RateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_4xx() {
        assert_eq!(
            RateError::InvalidCurrency("XX".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RateError::NotFound("GBP".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RateError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_upstream_errors_map_to_gateway_statuses() {
        assert_eq!(
            RateError::Upstream("boom".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            RateError::Decode("eof".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(RateError::Timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_error_message_includes_detail() {
        let err = RateError::InvalidCurrency("EURO".into());
        assert_eq!(err.to_string(), "Invalid currency: EURO");
    }
}
