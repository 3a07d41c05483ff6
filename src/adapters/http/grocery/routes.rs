//! Axum router configuration for grocery endpoints.

use axum::{routing::post, Router};

use super::handlers::{build_list, export_list};
use crate::adapters::http::state::AppState;

/// Create the grocery API router, mounted at `/api/grocery`.
pub fn grocery_routes() -> Router<AppState> {
    Router::new()
        .route("/list", post(build_list))
        .route("/export", post(export_list))
}
