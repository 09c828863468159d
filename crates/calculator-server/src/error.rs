//! API error types.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use calculator_core::CalcError;

use crate::dto::ErrorResponse;

/// API error type.
///
/// The `Display` text is exactly what ends up in the `error` field of the
/// response body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation or domain failure from an operation.
    #[error(transparent)]
    Calculation(#[from] CalcError),

    /// Bad request that never reached an operation (malformed query, unreadable body).
    #[error("{0}")]
    BadRequest(String),

    /// Request body exceeded the configured limit.
    #[error("Request body too large")]
    PayloadTooLarge,

    /// No route matched.
    #[error("Not Found")]
    NotFound,

    /// Unexpected failure. Details are logged, never returned.
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Calculation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
