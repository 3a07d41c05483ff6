//! Plan handlers.
//!
//! ## Commands
//! - Authorizing and counting a metered action
//!
//! ## Queries
//! - Get the caller's plan gate (tier, limits, usage, over-limit flags)
//! - Check whether the caller's tier includes a feature

mod authorize_metered_action;
mod check_feature;
mod get_plan_gate;

// Commands
pub use authorize_metered_action::{
    AuthorizeMeteredActionCommand, AuthorizeMeteredActionHandler, AuthorizeMeteredActionResult,
};

// Queries
pub use check_feature::{CheckFeatureHandler, CheckFeatureQuery};
pub use get_plan_gate::{GetPlanGateHandler, GetPlanGateQuery, PlanGateView};
