//! Error handling for the Golf Caddy relay
//!
//! Every failure is reported as `{"error": "<message>"}` with a status code
//! chosen per variant. Failures never outlive the request that caused them.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{ErrorBody, ValidationError};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Client supplied incomplete required input
    #[error("{0}")]
    MissingParameter(String),

    /// No route under `/api` matched
    #[error("{0}")]
    NotFound(String),

    /// Server secret missing or still the placeholder
    #[error("{0}")]
    NotConfigured(String),

    /// Network or transport failure reaching a provider
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// Provider answered with a non-success status
    #[error("{message}")]
    UpstreamRejected { status: u16, message: String },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotConfigured(_) | AppError::UpstreamUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::UpstreamRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::MissingParameter(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MissingParameter(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log the error for debugging
        if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), "Request failed: {:?}", self);
        } else {
            tracing::error!(status = status.as_u16(), "Request failed: {:?}", self);
        }

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MissingParameter("Distance is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::NotConfigured("key".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::UpstreamUnavailable("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::UpstreamRejected {
                status: 401,
                message: "Invalid API key".into()
            }
            .status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_invalid_upstream_status_falls_back_to_500() {
        let err = AppError::UpstreamRejected {
            status: 42,
            message: "odd".into(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: AppError = ValidationError::MissingParameter(shared::DISTANCE_REQUIRED).into();
        assert!(matches!(err, AppError::MissingParameter(ref m) if m == "Distance is required"));
    }

    #[test]
    fn test_message_is_display() {
        let err = AppError::UpstreamRejected {
            status: 429,
            message: "Rate limit reached".into(),
        };
        assert_eq!(err.to_string(), "Rate limit reached");
    }
}
