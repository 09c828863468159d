//! Request logging and panic recovery.

use std::any::Any;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;
use tracing::{error, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Logs method, URI, client IP, headers and body of every request.
///
/// The body is buffered up to [`AppState::max_body_bytes`] and handed on
/// unchanged; larger bodies are refused with 413.
pub async fn log_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(err) => {
            let err = err.into_inner();
            let api_error = if err.is::<LengthLimitError>() {
                ApiError::PayloadTooLarge
            } else {
                ApiError::BadRequest(format!("Failed to read request body: {err}"))
            };
            error!(method = %parts.method, uri = %parts.uri, "{}", api_error);
            return api_error.into_response();
        }
    };

    {
        let ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map_or_else(|| "unknown".to_string(), |ConnectInfo(addr)| addr.ip().to_string());
        let headers: BTreeMap<&str, Cow<'_, str>> = parts
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes())))
            .collect();

        info!(
            method = %parts.method,
            uri = %parts.uri,
            ip = %ip,
            headers = ?headers,
            body = %String::from_utf8_lossy(&bytes),
            "Incoming {} request to {}",
            parts.method,
            parts.uri
        );
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Converts a panic into a generic 500 response, logging the panic message.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else {
        "unknown panic payload"
    };

    error!("Unhandled error: {}", detail);
    ApiError::Internal.into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    use super::*;

    #[tokio::test]
    async fn test_handle_panic_hides_details() {
        let response = handle_panic(Box::new("secret state".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"error":"Internal Server Error"}"#);
    }

    #[tokio::test]
    async fn test_handle_panic_accepts_any_payload() {
        let response = handle_panic(Box::new(42_u32));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
