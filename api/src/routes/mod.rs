//! API route definitions

pub mod receipts;

use std::sync::Arc;

use axum::{routing::any, Router};

use crate::AppState;

/// Create all receipt routes.
///
/// Both routes accept any HTTP method.
pub fn receipt_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/receipts/process", any(receipts::process_receipt))
        .route("/receipts/:id/points", any(receipts::get_points))
}
