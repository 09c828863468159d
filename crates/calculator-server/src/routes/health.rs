//! Health check endpoint.

use axum::extract::State;
use axum::Json;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: state.service_name.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use crate::dto::HealthResponse;
    use crate::server::create_router;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_health() {
        let server = TestServer::new(create_router(AppState::default())).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: HealthResponse = response.json();
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "calculator-microservice");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
