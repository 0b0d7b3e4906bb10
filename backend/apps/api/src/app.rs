//! Router assembly

use axum::{Json, Router, routing::get};
use kernel::error::app_error::AppError;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use withdrawal::withdrawal_router;

/// Response for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Catch-all for unknown routes and unsupported methods
pub async fn not_found() -> AppError {
    AppError::not_found("Rota não encontrada")
}

/// Build the full application router
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", withdrawal_router())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
