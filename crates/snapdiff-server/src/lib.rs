//! snapdiff Server - HTTP front end for snapshot comparison
//!
//! Exposes one multipart upload endpoint per record variant plus a health
//! check. Comparison work runs on the blocking pool; every request is
//! wrapped in an `http.request` span and answered with an `x-request-id`.

pub mod config;
pub mod http;
mod middleware;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub use config::ServerConfig;

/// Route for comparison uploads; `:variant` selects the record shape
pub const COMPARE_ROUTE: &str = "/api/snapshot-compare/:variant";
pub const HEALTH_ROUTE: &str = "/healthz";

/// Shared per-process state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the service router with tracing and body-limit layers applied
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route(COMPARE_ROUTE, post(http::compare::snapshot_compare_handler))
        .route(HEALTH_ROUTE, get(http::health::healthz_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum::middleware::from_fn(
            middleware::request_tracing::request_tracing_middleware,
        ))
        .with_state(state)
}
