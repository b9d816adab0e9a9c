use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::classifier::ClassifierService;
use crate::config::NodeConfig;

use super::classify::classify_handler;
use super::handlers::health_handler;

/// Maximum accepted request body. Sits above the 10MB image cap so
/// oversized uploads fail through the decode error path instead of the
/// framework's 413.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Shared state cloned into every request handler
#[derive(Clone)]
pub struct AppState {
    /// Classifier loaded once at startup, read-only afterwards
    pub classifier: Arc<dyn ClassifierService>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn ClassifierService>) -> Self {
        Self { classifier }
    }
}

/// Build the router with all routes and layers
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Image classification endpoint
        .route("/classify", post(classify_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind the listener and serve until Ctrl-C
pub async fn start_server(
    config: &NodeConfig,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
