//! HTTP adapter for plan endpoints.
//!
//! - `GET /api/plan` - Caller's tier, limits, usage and over-limit flags
//! - `GET /api/plan/limits/:tier` - Entitlements for a tier
//! - `POST /api/plan/usage/:metric` - Authorize and count one metered action

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::plan_routes;
