//! Withdrawal Router

use axum::{Router, routing::post};

use crate::presentation::handlers;

/// Create the withdrawal router, meant to be nested under `/api`
pub fn withdrawal_router() -> Router {
    Router::new().route("/saque", post(handlers::calculate_withdrawal))
}
