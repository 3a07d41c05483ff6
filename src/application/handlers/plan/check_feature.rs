//! CheckFeatureHandler - Query handler for tier feature access.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::plan::{Feature, PlanError, SubscriptionTier};
use crate::ports::PlanProfileReader;

/// Query to check if a user's tier includes a feature.
#[derive(Debug, Clone)]
pub struct CheckFeatureQuery {
    pub user_id: UserId,
    pub feature: Feature,
}

/// Handler for feature access checks.
///
/// Returns the caller's tier when the feature is included, and
/// `PlanError::FeatureNotIncluded` otherwise.
pub struct CheckFeatureHandler {
    reader: Arc<dyn PlanProfileReader>,
}

impl CheckFeatureHandler {
    pub fn new(reader: Arc<dyn PlanProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: CheckFeatureQuery) -> Result<SubscriptionTier, PlanError> {
        let tier = self
            .reader
            .get_plan_profile(&query.user_id)
            .await?
            .map(|profile| profile.resolved_tier())
            .unwrap_or_default();

        if tier.limits().allows(query.feature) {
            Ok(tier)
        } else {
            tracing::info!(
                user_id = %query.user_id,
                tier = tier.as_str(),
                feature = ?query.feature,
                "Feature not included in tier"
            );
            Err(PlanError::feature_not_included(query.feature))
        }
    }
}
