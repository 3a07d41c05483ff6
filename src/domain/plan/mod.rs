//! Plan domain module.
//!
//! Subscription tiers, their static entitlements, and the usage gate that
//! decides whether a metered counter has run past its tier's allowance.
//!
//! # Module Structure
//!
//! - `tier` - SubscriptionTier levels and gated features
//! - `limit` - Capped/unlimited allowance and the over-limit comparison
//! - `entitlements` - Per-tier entitlement table
//! - `usage` - Usage snapshot, metrics and gate evaluation
//! - `errors` - Gate denials surfaced to callers

mod entitlements;
mod errors;
mod limit;
mod tier;
mod usage;

pub use entitlements::Entitlements;
pub use errors::PlanError;
pub use limit::{is_over_limit, Limit};
pub use tier::{Feature, SubscriptionTier};
pub use usage::{evaluate_gate, OverLimit, UsageMetric, UsageSnapshot};
