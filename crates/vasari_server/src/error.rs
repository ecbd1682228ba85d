//! HTTP error envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use vasari_error::{FieldError, PipelineError, StoreError, ValidationError};

/// Error payload returned to HTTP clients.
///
/// Every failure carries `success: false` and a human-readable message;
/// validation failures additionally carry the full field-level list so a
/// client can fix its request in one pass.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Always false
    pub success: bool,
    /// Human-readable description
    pub message: String,
    /// Field-level failures, present for validation errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Failures a handler can surface.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request, 400
    Validation(ValidationError),
    /// Unknown article id, 404
    NotFound(String),
    /// A mandatory pipeline stage failed, 500
    Pipeline(PipelineError),
    /// The store itself failed, 500
    Store(StoreError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self::Pipeline(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            Self::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(err.errors),
            ),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message, None),
            // Location details stay in the logs; clients get the kind.
            Self::Pipeline(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                err.kind.to_string(),
                None,
            ),
            Self::Store(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                err.kind.to_string(),
                None,
            ),
        };
        let body = ErrorBody {
            success: false,
            message,
            errors,
        };
        (status, Json(body)).into_response()
    }
}
