//! Error types for the Rolo server.
//!
//! This module defines custom error types using `thiserror`, along with the
//! mapping from each error class to its HTTP status and response envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::domain::ValidationError;

/// Errors surfaced by API request handling.
///
/// Every variant renders as `{"success": false, "message": ...}` with the
/// status from [`ApiError::status`]. Storage and crypto failures are logged
/// in full at the point of conversion and reach the client only as a generic
/// per-operation message.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Missing, malformed, expired, or forged bearer token
    #[error("{0}")]
    Auth(String),

    /// Login rejected; deliberately silent about which credential was wrong
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Resource absent, or owned by another user
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Duplicate registration
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure; the message is the public face, details were logged
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Authorization failure with the given client-facing message.
    pub fn auth(message: impl Into<String>) -> Self {
        ApiError::Auth(message.into())
    }

    /// Conflict with the given client-facing message.
    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    /// Log an unexpected failure and hide it behind a generic message.
    pub fn internal(public: impl Into<String>, err: impl std::fmt::Display) -> Self {
        let public = public.into();
        tracing::error!(error = %err, "{}", public);
        ApiError::Internal(public)
    }

    /// The HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidCredentials | ApiError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::NotFound("Contact");
        assert_eq!(err.to_string(), "Contact not found");

        let err = ApiError::InvalidCredentials;
        assert_eq!(err.to_string(), "Invalid credentials");

        let err = ApiError::from(ValidationError::Required("Name"));
        assert_eq!(err.to_string(), "Name is required");

        let err = ConfigError::MissingVar("JWT_SECRET".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: JWT_SECRET"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(ValidationError::Required("Name")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::conflict("User already exists with this email").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::auth("No token provided").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound("Contact").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("Server error".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_envelope_body() {
        let response = ApiError::NotFound("Contact").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Contact not found"));
    }
}
