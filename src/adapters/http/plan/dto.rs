//! Response DTOs for plan endpoints.

use serde::Serialize;

use crate::application::handlers::plan::{AuthorizeMeteredActionResult, PlanGateView};
use crate::domain::plan::{Entitlements, Limit, OverLimit, SubscriptionTier, UsageSnapshot};

/// Plan gate for the current user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanGateResponse {
    pub tier: SubscriptionTier,
    pub tier_name: &'static str,
    pub limits: Entitlements,
    pub usage: UsageResponse,
    pub over: OverLimit,
}

impl From<PlanGateView> for PlanGateResponse {
    fn from(view: PlanGateView) -> Self {
        Self {
            tier: view.tier,
            tier_name: view.tier.display_name(),
            limits: view.limits,
            usage: view.usage.into(),
            over: view.over,
        }
    }
}

/// Usage counters, named as the client reads them.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageResponse {
    pub meal_plans: i64,
    pub smart_suggest: i64,
    pub recipes: i64,
}

impl From<UsageSnapshot> for UsageResponse {
    fn from(usage: UsageSnapshot) -> Self {
        Self {
            meal_plans: usage.meal_plans_used,
            smart_suggest: usage.smart_suggests_used,
            recipes: usage.recipes_count,
        }
    }
}

/// Entitlements for one tier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierLimitsResponse {
    pub tier: SubscriptionTier,
    pub limits: Entitlements,
}

/// An allowed metered action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeteredActionResponse {
    pub tier: SubscriptionTier,
    pub limit: Limit,
    pub usage: UsageResponse,
}

impl From<AuthorizeMeteredActionResult> for MeteredActionResponse {
    fn from(result: AuthorizeMeteredActionResult) -> Self {
        Self {
            tier: result.tier,
            limit: result.limit,
            usage: result.usage.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_gate_response_shape() {
        let view = PlanGateView::from_profile(None);
        let json = serde_json::to_value(PlanGateResponse::from(view)).unwrap();

        assert_eq!(json["tier"], "free");
        assert_eq!(json["tierName"], "Free");
        assert_eq!(json["limits"]["mealPlans"], 1);
        assert_eq!(json["usage"]["mealPlans"], 0);
        assert_eq!(json["over"]["mealPlans"], false);
    }

    #[test]
    fn unlimited_serializes_as_string() {
        let response = TierLimitsResponse {
            tier: SubscriptionTier::Premium,
            limits: Entitlements::for_tier(SubscriptionTier::Premium),
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["limits"]["recipes"], "unlimited");
        assert_eq!(json["limits"]["ordering"], true);
    }
}
