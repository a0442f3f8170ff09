pub mod core;
pub mod error_handler;
mod routes;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};
use crate::routes::{gitlab_mr::gitlab_mr_route::gitlab_mr_route, ping::ping_route::ping_route};

/// Builds the router with every endpoint wired to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping_route))
        .route("/gitlab/mr", post(gitlab_mr_route))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Serves the API on `addr` until Ctrl+C.
pub async fn start(addr: &str, state: AppState) -> AppResult<()> {
    let app = build_router(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::Bind)?;
    info!(%addr, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        // Without a signal handler the server just runs until killed.
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
