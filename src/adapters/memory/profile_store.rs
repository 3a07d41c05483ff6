//! In-memory profile store for plan data.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::plan::{is_over_limit, Limit, UsageMetric};
use crate::ports::{IncrementOutcome, PlanProfile, PlanProfileReader, UsageRecorder};

/// Profile rows keyed by user.
///
/// Incrementing a counter for an unknown user creates a tier-less row,
/// which reads as free. The write lock covers both the limit check and the
/// increment.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<UserId, PlanProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a profile row.
    pub async fn upsert(&self, user_id: UserId, profile: PlanProfile) {
        self.profiles.write().await.insert(user_id, profile);
    }
}

#[async_trait]
impl PlanProfileReader for InMemoryProfileStore {
    async fn get_plan_profile(&self, user_id: &UserId) -> Result<Option<PlanProfile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }
}

#[async_trait]
impl UsageRecorder for InMemoryProfileStore {
    async fn increment_within(
        &self,
        user_id: &UserId,
        metric: UsageMetric,
        limit: Limit,
    ) -> Result<IncrementOutcome, DomainError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.entry(user_id.clone()).or_default();
        if is_over_limit(profile.usage.count_for(metric), limit) {
            return Ok(IncrementOutcome::AtLimit(profile.usage));
        }
        profile.usage = profile.usage.incremented(metric);
        Ok(IncrementOutcome::Recorded(profile.usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::{SubscriptionTier, UsageSnapshot};
    use std::sync::Arc;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn unknown_user_has_no_profile() {
        let store = InMemoryProfileStore::new();
        assert_eq!(store.get_plan_profile(&user()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn upserted_profile_is_returned() {
        let store = InMemoryProfileStore::new();
        let profile = PlanProfile::new(SubscriptionTier::Pro, UsageSnapshot::new());
        store.upsert(user(), profile.clone()).await;

        assert_eq!(store.get_plan_profile(&user()).await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn increment_updates_one_counter() {
        let store = InMemoryProfileStore::new();
        store
            .upsert(user(), PlanProfile::new(SubscriptionTier::Free, UsageSnapshot::new()))
            .await;

        store
            .increment_within(&user(), UsageMetric::Recipes, Limit::Unlimited)
            .await
            .unwrap();
        let outcome = store
            .increment_within(&user(), UsageMetric::Recipes, Limit::Unlimited)
            .await
            .unwrap();

        let IncrementOutcome::Recorded(usage) = outcome else {
            panic!("expected the increment to be recorded, got {:?}", outcome);
        };
        assert_eq!(usage.recipes_count, 2);
        assert_eq!(usage.meal_plans_used, 0);
    }

    #[tokio::test]
    async fn increment_for_unknown_user_creates_free_row() {
        let store = InMemoryProfileStore::new();
        store
            .increment_within(&user(), UsageMetric::MealPlans, Limit::Capped(1))
            .await
            .unwrap();

        let profile = store.get_plan_profile(&user()).await.unwrap().unwrap();
        assert_eq!(profile.resolved_tier(), SubscriptionTier::Free);
        assert_eq!(profile.usage.meal_plans_used, 1);
    }

    #[tokio::test]
    async fn increment_at_limit_is_refused_without_writing() {
        let store = InMemoryProfileStore::new();
        let usage = UsageSnapshot {
            meal_plans_used: 1,
            ..UsageSnapshot::new()
        };
        store
            .upsert(user(), PlanProfile::new(SubscriptionTier::Free, usage))
            .await;

        let outcome = store
            .increment_within(&user(), UsageMetric::MealPlans, Limit::Capped(1))
            .await
            .unwrap();

        assert_eq!(outcome, IncrementOutcome::AtLimit(usage));
        let profile = store.get_plan_profile(&user()).await.unwrap().unwrap();
        assert_eq!(profile.usage.meal_plans_used, 1);
    }

    #[tokio::test]
    async fn parallel_increments_stop_at_the_cap() {
        let store = Arc::new(InMemoryProfileStore::new());

        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .increment_within(&user(), UsageMetric::Recipes, Limit::Capped(5))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut recorded = 0;
        for task in tasks {
            if matches!(task.await.unwrap(), IncrementOutcome::Recorded(_)) {
                recorded += 1;
            }
        }

        assert_eq!(recorded, 5);
        let profile = store.get_plan_profile(&user()).await.unwrap().unwrap();
        assert_eq!(profile.usage.recipes_count, 5);
    }
}
