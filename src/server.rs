//! HTTP API
//!
//! ## Routes
//!
//! - `GET /api/:collection/:id`: cached rarity lookup. `id` must be a
//!   non-negative integer; anything else is a 400 before the service is called.
//! - `GET /health`: `{ "ok": true, "cached_items": n }`.
//!
//! CORS is permissive so browser frontends on any origin can call the API.

use crate::error::ApiError;
use crate::service::RarityService;
use axum::extract::{Path, State};
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Lookup failed");
        }
        (status, self.to_string()).into_response()
    }
}

/// Build the axum `Router` for the lookup API.
pub fn router(service: Arc<RarityService>) -> Router {
    Router::new()
        .route("/api/:collection/:id", get(item_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Bind `addr` and serve until Ctrl+C, then flush the cache.
pub async fn serve(service: Arc<RarityService>, addr: SocketAddr) -> Result<(), ApiError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::ConfigError(format!("Failed to bind {}: {}", addr, e)))?;
    let local = listener
        .local_addr()
        .map_err(|e| ApiError::ConfigError(format!("Failed to read bound address: {}", e)))?;
    info!(addr = %local, "Serving rarity lookups");

    axum::serve(listener, router(service.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::ConfigError(format!("Server error: {}", e)))?;

    service.flush()?;
    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

async fn item_handler(
    State(service): State<Arc<RarityService>>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let id: u64 = id
        .parse()
        .map_err(|e| ApiError::InvalidInput(format!("invalid item id '{}': {}", id, e)))?;

    let lookup = service.lookup(&collection, id).await?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (HeaderName::from_static("x-cache"), HeaderValue::from_static(lookup.source.as_str())),
        ],
        lookup.body,
    )
        .into_response())
}

async fn health_handler(State(service): State<Arc<RarityService>>) -> impl IntoResponse {
    Json(json!({ "ok": true, "cached_items": service.cached_items() }))
}
