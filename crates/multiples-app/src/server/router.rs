use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the router with all pages and endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::pages::home))
        .route(
            "/calculator",
            get(handlers::pages::calculator).post(handlers::pages::submit),
        )
        // JSON API
        .route("/api/classify", get(handlers::api::classify))
        .route("/api/divisors", get(handlers::api::divisors))
        // Health check
        .route("/health", get(handlers::health))
        // State and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
