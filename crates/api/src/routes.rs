use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all HTTP routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::get_metrics))
        .route("/debug/domains", get(handlers::get_recursive_domains))
        .route("/debug/records", get(handlers::get_recursive_records))
        .with_state(state)
}
