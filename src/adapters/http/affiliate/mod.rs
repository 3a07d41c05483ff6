//! HTTP adapter for affiliate endpoints.
//!
//! - `POST /api/affiliate/click` - Tracked order link for a partner (paid tiers)
//! - `GET /api/affiliate/summary` - Recent clicks and totals (admins)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::affiliate_routes;
