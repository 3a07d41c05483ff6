//! Recorded outbound affiliate clicks.

use serde::{Deserialize, Serialize};

use super::Partner;
use crate::domain::foundation::{ClickId, Timestamp, UserId};

/// Lifecycle of an outbound order link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickStatus {
    /// The user followed the link.
    #[default]
    Clicked,
    /// The partner reported a completed order.
    Complete,
}

/// One followed order link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateClick {
    pub id: ClickId,
    pub user_id: UserId,
    pub partner: Partner,
    pub order_url: String,
    pub status: ClickStatus,
    pub created_at: Timestamp,
}

impl AffiliateClick {
    /// A fresh click, stamped now.
    pub fn clicked(user_id: UserId, partner: Partner, order_url: impl Into<String>) -> Self {
        Self {
            id: ClickId::new(),
            user_id,
            partner,
            order_url: order_url.into(),
            status: ClickStatus::Clicked,
            created_at: Timestamp::now(),
        }
    }
}

/// Dashboard totals over a window of clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AffiliateSummary {
    pub clicks: usize,
    pub orders: usize,
    /// Commission estimates are not recorded yet, so this stays at zero.
    pub commissions: f64,
}

impl AffiliateSummary {
    pub fn from_clicks(clicks: &[AffiliateClick]) -> Self {
        Self {
            clicks: clicks.len(),
            orders: clicks
                .iter()
                .filter(|c| c.status == ClickStatus::Complete)
                .count(),
            commissions: 0.0,
        }
    }
}
