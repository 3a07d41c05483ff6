//! HTTP adapter for grocery list endpoints.
//!
//! - `POST /api/grocery/list` - Merge, scale and filter raw items
//! - `POST /api/grocery/export` - Same, rendered as lines (paid tiers)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::grocery_routes;
