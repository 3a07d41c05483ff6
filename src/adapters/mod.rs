//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory stores standing in for the hosted data store
//! - `http` - REST API over axum

pub mod http;
pub mod memory;

pub use memory::{InMemoryAffiliateStore, InMemoryProfileStore};
