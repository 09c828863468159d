//! Router assembly and server startup.

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, info_span};

use crate::config::ServerConfig;
use crate::middleware::{handle_panic, log_request};
use crate::routes;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    with_middleware(routes::api_routes(), state)
}

/// Wrap `router` in the service middleware stack and attach `state`.
///
/// Outermost first: HTTP tracing, CORS, panic recovery, request logging.
/// Unmatched paths fall through to a JSON 404. The request span carries the
/// service name, so every record logged while handling a request names it.
pub fn with_middleware(router: Router<AppState>, state: AppState) -> Router {
    let service = state.service_name.clone();
    let make_span = move |request: &Request<Body>| {
        info_span!(
            "request",
            service = %service,
            method = %request.method(),
            uri = %request.uri(),
        )
    };

    router
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn_with_state(state.clone(), log_request))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .with_state(state)
}

/// Run the server until Ctrl-C.
pub async fn run_server(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    let addr = listener.local_addr()?;

    info!(service = %config.service_name, "Calculator microservice running on {}", addr);
    info!("Endpoints:");
    info!("  GET  /health");
    for operation in calculator_core::Operation::ALL {
        info!("  GET  /{}", operation.path());
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to install Ctrl-C handler: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
