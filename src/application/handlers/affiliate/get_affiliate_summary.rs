//! GetAffiliateSummaryHandler - Query handler for the admin affiliate dashboard.

use std::sync::Arc;

use crate::domain::admin::AdminPolicy;
use crate::domain::affiliate::{AffiliateClick, AffiliateError, AffiliateSummary};
use crate::ports::AffiliateClickRepository;

/// How many recent clicks the dashboard shows.
const RECENT_CLICKS: usize = 200;

/// Query for the affiliate dashboard.
#[derive(Debug, Clone)]
pub struct GetAffiliateSummaryQuery {
    /// Email of the caller, checked against the admin allow-list.
    pub email: Option<String>,
}

/// Recent clicks and their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct GetAffiliateSummaryResult {
    pub clicks: Vec<AffiliateClick>,
    pub summary: AffiliateSummary,
}

/// Handler for the affiliate dashboard. Admins only.
pub struct GetAffiliateSummaryHandler {
    clicks: Arc<dyn AffiliateClickRepository>,
    admins: AdminPolicy,
}

impl GetAffiliateSummaryHandler {
    pub fn new(clicks: Arc<dyn AffiliateClickRepository>, admins: AdminPolicy) -> Self {
        Self { clicks, admins }
    }

    pub async fn handle(
        &self,
        query: GetAffiliateSummaryQuery,
    ) -> Result<GetAffiliateSummaryResult, AffiliateError> {
        if !self.admins.is_admin_email(query.email.as_deref()) {
            tracing::warn!(email = ?query.email, "Non-admin requested affiliate summary");
            return Err(AffiliateError::AdminRequired);
        }

        let clicks = self.clicks.list_recent(RECENT_CLICKS).await?;
        let summary = AffiliateSummary::from_clicks(&clicks);

        Ok(GetAffiliateSummaryResult { clicks, summary })
    }
}
