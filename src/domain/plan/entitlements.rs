//! Tier-based entitlement table.
//!
//! Defines the quotas and features granted by each subscription tier.

use serde::{Deserialize, Serialize};

use super::{Feature, Limit, OverLimit, SubscriptionTier, UsageMetric, UsageSnapshot};

/// Quotas and feature flags for a subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entitlements {
    /// Meal plans generated per month.
    pub meal_plans: Limit,
    /// Custom recipes saved at once.
    pub recipes: Limit,
    /// Smart-suggest calls per month.
    pub smart_suggest: Limit,
    /// Whether the grocery list can be exported.
    pub export_list: bool,
    /// Whether the grocery list can be sent to an ordering partner.
    pub ordering: bool,
}

impl Entitlements {
    /// Get the entitlements for a specific tier.
    ///
    /// # Tier Configuration
    ///
    /// | Tier | Meal plans | Recipes | Smart suggest | Export | Ordering |
    /// |------|------------|---------|---------------|--------|----------|
    /// | Free | 1 | 5 | 1 | No | No |
    /// | Pro | 10 | 100 | Unlimited | Yes | Yes |
    /// | Premium | Unlimited | Unlimited | Unlimited | Yes | Yes |
    pub const fn for_tier(tier: SubscriptionTier) -> Self {
        match tier {
            SubscriptionTier::Free => Self {
                meal_plans: Limit::Capped(1),
                recipes: Limit::Capped(5),
                smart_suggest: Limit::Capped(1),
                export_list: false,
                ordering: false,
            },
            SubscriptionTier::Pro => Self {
                meal_plans: Limit::Capped(10),
                recipes: Limit::Capped(100),
                smart_suggest: Limit::Unlimited,
                export_list: true,
                ordering: true,
            },
            SubscriptionTier::Premium => Self {
                meal_plans: Limit::Unlimited,
                recipes: Limit::Unlimited,
                smart_suggest: Limit::Unlimited,
                export_list: true,
                ordering: true,
            },
        }
    }

    /// Allowance for a single metered counter.
    pub fn limit_for(&self, metric: UsageMetric) -> Limit {
        match metric {
            UsageMetric::MealPlans => self.meal_plans,
            UsageMetric::SmartSuggest => self.smart_suggest,
            UsageMetric::Recipes => self.recipes,
        }
    }

    /// Whether a boolean feature is switched on.
    pub fn allows(&self, feature: Feature) -> bool {
        match feature {
            Feature::ExportList => self.export_list,
            Feature::Ordering => self.ordering,
        }
    }

    /// Evaluates every metered counter independently against these limits.
    pub fn evaluate(&self, usage: &UsageSnapshot) -> OverLimit {
        OverLimit {
            meal_plans: usage.is_over(UsageMetric::MealPlans, self),
            smart_suggest: usage.is_over(UsageMetric::SmartSuggest, self),
            recipes: usage.is_over(UsageMetric::Recipes, self),
        }
    }
}
