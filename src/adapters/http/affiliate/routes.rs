//! Axum router configuration for affiliate endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_summary, track_click};
use crate::adapters::http::state::AppState;

/// Create the affiliate API router, mounted at `/api/affiliate`.
///
/// # Routes
/// - `POST /click` - Tracked order link (Pro and above)
/// - `GET /summary` - Dashboard (admin emails only)
pub fn affiliate_routes() -> Router<AppState> {
    Router::new()
        .route("/click", post(track_click))
        .route("/summary", get(get_summary))
}
