//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `plan` - Subscription tiers, entitlements and the usage gate
//! - `grocery` - Grocery item aggregation (merge, scale, pantry exclusion)
//! - `affiliate` - Partner order links and click tracking
//! - `admin` - Operator allow-list

pub mod admin;
pub mod affiliate;
pub mod foundation;
pub mod grocery;
pub mod plan;
