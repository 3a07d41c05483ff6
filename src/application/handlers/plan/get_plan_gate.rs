//! GetPlanGateHandler - Query handler for the caller's plan gate.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::plan::{Entitlements, OverLimit, PlanError, SubscriptionTier, UsageSnapshot};
use crate::ports::{PlanProfile, PlanProfileReader};

/// Query for a user's plan gate.
#[derive(Debug, Clone)]
pub struct GetPlanGateQuery {
    pub user_id: UserId,
}

/// Tier, limits, usage and per-metric over-limit flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanGateView {
    pub tier: SubscriptionTier,
    pub limits: Entitlements,
    pub usage: UsageSnapshot,
    pub over: OverLimit,
}

impl PlanGateView {
    /// Builds the view from a profile row; no row means a fresh free user.
    pub fn from_profile(profile: Option<&PlanProfile>) -> Self {
        let tier = profile
            .map(PlanProfile::resolved_tier)
            .unwrap_or_default();
        let usage = profile.map(|p| p.usage).unwrap_or_default();
        let limits = Entitlements::for_tier(tier);

        Self {
            tier,
            limits,
            usage,
            over: limits.evaluate(&usage),
        }
    }
}

/// Handler for the plan gate query.
pub struct GetPlanGateHandler {
    reader: Arc<dyn PlanProfileReader>,
}

impl GetPlanGateHandler {
    pub fn new(reader: Arc<dyn PlanProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetPlanGateQuery) -> Result<PlanGateView, PlanError> {
        let profile = self.reader.get_plan_profile(&query.user_id).await?;
        if profile.is_none() {
            tracing::debug!(user_id = %query.user_id, "No profile found, using free tier defaults");
        }
        Ok(PlanGateView::from_profile(profile.as_ref()))
    }
}
