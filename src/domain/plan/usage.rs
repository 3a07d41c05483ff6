//! Usage counters and gate evaluation.

use serde::{Deserialize, Deserializer, Serialize};

use super::{is_over_limit, Entitlements, SubscriptionTier};

/// A metered action counted against a tier allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageMetric {
    /// Meal plans generated this billing period.
    MealPlans,
    /// Smart-suggest calls this billing period.
    SmartSuggest,
    /// Custom recipes currently saved.
    Recipes,
}

impl UsageMetric {
    /// Returns the display name for this metric.
    pub fn display_name(&self) -> &'static str {
        match self {
            UsageMetric::MealPlans => "meal plans",
            UsageMetric::SmartSuggest => "smart suggestions",
            UsageMetric::Recipes => "custom recipes",
        }
    }

    /// True when the counter resets each billing period.
    pub fn resets_monthly(&self) -> bool {
        !matches!(self, UsageMetric::Recipes)
    }
}

impl std::str::FromStr for UsageMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meal_plans" => Ok(UsageMetric::MealPlans),
            "smart_suggest" => Ok(UsageMetric::SmartSuggest),
            "recipes" => Ok(UsageMetric::Recipes),
            other => Err(format!("unknown usage metric '{}'", other)),
        }
    }
}

/// Point-in-time copy of a user's usage counters.
///
/// Counters are signed and unvalidated; the profile store owns them.
/// Missing and null counters read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    #[serde(default, alias = "monthly_meal_plans_used", deserialize_with = "null_as_zero")]
    pub meal_plans_used: i64,
    #[serde(default, alias = "monthly_smart_suggests_used", deserialize_with = "null_as_zero")]
    pub smart_suggests_used: i64,
    #[serde(default, alias = "custom_recipes_count", deserialize_with = "null_as_zero")]
    pub recipes_count: i64,
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Option::<i64>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl UsageSnapshot {
    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a counter.
    pub fn count_for(&self, metric: UsageMetric) -> i64 {
        match metric {
            UsageMetric::MealPlans => self.meal_plans_used,
            UsageMetric::SmartSuggest => self.smart_suggests_used,
            UsageMetric::Recipes => self.recipes_count,
        }
    }

    /// Returns a copy with one counter bumped by one.
    pub fn incremented(mut self, metric: UsageMetric) -> Self {
        match metric {
            UsageMetric::MealPlans => self.meal_plans_used = self.meal_plans_used.saturating_add(1),
            UsageMetric::SmartSuggest => {
                self.smart_suggests_used = self.smart_suggests_used.saturating_add(1)
            }
            UsageMetric::Recipes => self.recipes_count = self.recipes_count.saturating_add(1),
        }
        self
    }

    /// Check a single counter against the given entitlements.
    pub fn is_over(&self, metric: UsageMetric, limits: &Entitlements) -> bool {
        is_over_limit(self.count_for(metric), limits.limit_for(metric))
    }
}

/// Per-metric over-limit flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverLimit {
    pub meal_plans: bool,
    pub smart_suggest: bool,
    pub recipes: bool,
}

impl OverLimit {
    /// Flag for one metric.
    pub fn for_metric(&self, metric: UsageMetric) -> bool {
        match metric {
            UsageMetric::MealPlans => self.meal_plans,
            UsageMetric::SmartSuggest => self.smart_suggest,
            UsageMetric::Recipes => self.recipes,
        }
    }

    /// True if any counter is over.
    pub fn any(&self) -> bool {
        self.meal_plans || self.smart_suggest || self.recipes
    }
}

/// Evaluates a usage snapshot against a tier's entitlements.
pub fn evaluate_gate(tier: SubscriptionTier, usage: &UsageSnapshot) -> OverLimit {
    Entitlements::for_tier(tier).evaluate(usage)
}
