//! Route handlers.

pub mod calculator;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::error::ApiError;
use crate::state::AppState;

/// Operation and health routes, without middleware or state.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Operations
        .route("/add", get(calculator::add))
        .route("/subtract", get(calculator::subtract))
        .route("/multiply", get(calculator::multiply))
        .route("/divide", get(calculator::divide))
        .route("/power", get(calculator::power))
        .route("/sqrt", get(calculator::sqrt))
        .route("/modulo", get(calculator::modulo))
}

/// Fallback for unmatched paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
