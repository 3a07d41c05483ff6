//! SwiftEatz - Meal planning backend
//!
//! Subscription plan gating, grocery list aggregation and affiliate
//! ordering links, laid out as ports and adapters around a pure domain.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
