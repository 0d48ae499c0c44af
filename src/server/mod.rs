//! HTTP surface for the harvester
//!
//! This module handles:
//! - Router assembly (`GET /` health check, `POST /extract`)
//! - CORS from the configured origins
//! - Serving with graceful shutdown

use crate::config::{Config, ServerConfig};
use crate::{ConfigError, HarvestError};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod routes;

/// Shared state handed to every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Builds the CORS layer allowed by the server configuration
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ConfigError> {
    let origin = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|e| ConfigError::InvalidOrigin(format!("'{}': {}", o, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Builds the application router
///
/// | Route | Purpose |
/// |-------|---------|
/// | `GET /` | Health check |
/// | `POST /extract` | Form field `domains` in, XLSX report out |
pub fn build_router(config: Arc<Config>) -> Result<Router, ConfigError> {
    let cors = cors_layer(&config.server)?;
    let state = AppState { config };

    Ok(Router::new()
        .route("/", get(routes::health_check))
        .route("/extract", post(routes::extract))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Binds the configured address and serves until Ctrl+C
pub async fn serve(config: Config) -> Result<(), HarvestError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let router = build_router(Arc::new(config))?;

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down gracefully...");
}
