use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/lookup", get(handlers::lookup))
        .route("/health", get(handlers::passthrough))
        .route("/debug", get(handlers::passthrough))
        .route("/dns_types", get(handlers::dns_types))
        .route("/dns_servers", get(handlers::dns_servers))
        .with_state(state)
}
