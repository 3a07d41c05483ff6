//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod affiliate;
pub mod grocery;
pub mod plan;
