//! Affiliate domain module.
//!
//! Grocery partners, tracking-parameter injection for outbound order links,
//! and the click log kept for the admin dashboard.

mod click;
mod errors;
mod partner;
mod tracking;

pub use click::{AffiliateClick, AffiliateSummary, ClickStatus};
pub use errors::AffiliateError;
pub use partner::{AffiliateIds, Partner};
pub use tracking::apply_affiliate_tracking;
