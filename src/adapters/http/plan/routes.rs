//! Axum router configuration for plan endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_plan, get_tier_limits, record_usage};
use crate::adapters::http::state::AppState;

/// Create the plan API router, mounted at `/api/plan`.
///
/// # Routes
/// - `GET /` - Plan gate for the caller
/// - `GET /limits/:tier` - Entitlements for a tier (no auth)
/// - `POST /usage/:metric` - Count a metered action, 402 when over the limit
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_plan))
        .route("/limits/:tier", get(get_tier_limits))
        .route("/usage/:metric", post(record_usage))
}
