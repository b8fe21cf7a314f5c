pub mod api;
pub mod pages;

use axum::response::IntoResponse;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "Multiples calculator is running"
}
