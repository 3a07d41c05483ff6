//! Affiliate handlers.
//!
//! ## Commands
//! - Tracking an outbound order link (paid tiers)
//!
//! ## Queries
//! - Affiliate dashboard summary (admins)

mod get_affiliate_summary;
mod track_affiliate_click;

pub use get_affiliate_summary::{
    GetAffiliateSummaryHandler, GetAffiliateSummaryQuery, GetAffiliateSummaryResult,
};
pub use track_affiliate_click::{
    TrackAffiliateClickCommand, TrackAffiliateClickHandler, TrackAffiliateClickResult,
    TrackingDefaults,
};
