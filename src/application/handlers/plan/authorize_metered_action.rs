//! AuthorizeMeteredActionHandler - Command handler for metered actions.
//!
//! Called before an action that consumes a tier allowance (generating a meal
//! plan, asking for a smart suggestion, saving a custom recipe). The counter
//! is only incremented when the action is allowed, and the store applies the
//! limit check and the increment together.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::plan::{Limit, PlanError, SubscriptionTier, UsageMetric, UsageSnapshot};
use crate::ports::{IncrementOutcome, PlanProfileReader, UsageRecorder};

/// Command to authorize one unit of a metered action.
#[derive(Debug, Clone)]
pub struct AuthorizeMeteredActionCommand {
    pub user_id: UserId,
    pub metric: UsageMetric,
}

/// Result of an allowed metered action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeMeteredActionResult {
    pub tier: SubscriptionTier,
    pub limit: Limit,
    /// Counters after the increment.
    pub usage: UsageSnapshot,
}

/// Handler for authorizing metered actions.
pub struct AuthorizeMeteredActionHandler {
    reader: Arc<dyn PlanProfileReader>,
    recorder: Arc<dyn UsageRecorder>,
}

impl AuthorizeMeteredActionHandler {
    pub fn new(reader: Arc<dyn PlanProfileReader>, recorder: Arc<dyn UsageRecorder>) -> Self {
        Self { reader, recorder }
    }

    pub async fn handle(
        &self,
        cmd: AuthorizeMeteredActionCommand,
    ) -> Result<AuthorizeMeteredActionResult, PlanError> {
        let tier = self
            .reader
            .get_plan_profile(&cmd.user_id)
            .await?
            .map(|profile| profile.resolved_tier())
            .unwrap_or_default();
        let limit = tier.limits().limit_for(cmd.metric);

        match self
            .recorder
            .increment_within(&cmd.user_id, cmd.metric, limit)
            .await?
        {
            IncrementOutcome::Recorded(usage) => {
                tracing::debug!(
                    user_id = %cmd.user_id,
                    metric = ?cmd.metric,
                    count = usage.count_for(cmd.metric),
                    "Metered action recorded"
                );
                Ok(AuthorizeMeteredActionResult { tier, limit, usage })
            }
            IncrementOutcome::AtLimit(usage) => {
                let used = usage.count_for(cmd.metric);
                tracing::info!(
                    user_id = %cmd.user_id,
                    tier = tier.as_str(),
                    metric = ?cmd.metric,
                    used,
                    %limit,
                    "Metered action denied"
                );
                Err(PlanError::limit_reached(cmd.metric, used, limit))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::plan::is_over_limit;
    use crate::ports::PlanProfile;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct MockProfileStore {
        profile: Mutex<Option<PlanProfile>>,
        fail_write: bool,
        /// Yield after reading, like a store doing network I/O.
        slow_reads: bool,
    }

    impl MockProfileStore {
        fn with(tier: SubscriptionTier, usage: UsageSnapshot) -> Self {
            Self {
                profile: Mutex::new(Some(PlanProfile::new(tier, usage))),
                fail_write: false,
                slow_reads: false,
            }
        }

        fn empty() -> Self {
            Self {
                profile: Mutex::new(None),
                fail_write: false,
                slow_reads: false,
            }
        }

        fn failing_writes(tier: SubscriptionTier) -> Self {
            Self {
                fail_write: true,
                ..Self::with(tier, UsageSnapshot::new())
            }
        }

        fn slow(tier: SubscriptionTier) -> Self {
            Self {
                slow_reads: true,
                ..Self::with(tier, UsageSnapshot::new())
            }
        }

        fn usage(&self) -> UsageSnapshot {
            self.profile
                .lock()
                .unwrap()
                .as_ref()
                .map(|p| p.usage)
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl PlanProfileReader for MockProfileStore {
        async fn get_plan_profile(
            &self,
            _user_id: &UserId,
        ) -> Result<Option<PlanProfile>, DomainError> {
            let profile = self.profile.lock().unwrap().clone();
            if self.slow_reads {
                tokio::task::yield_now().await;
            }
            Ok(profile)
        }
    }

    #[async_trait]
    impl UsageRecorder for MockProfileStore {
        async fn increment_within(
            &self,
            _user_id: &UserId,
            metric: UsageMetric,
            limit: Limit,
        ) -> Result<IncrementOutcome, DomainError> {
            if self.fail_write {
                return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated write failure"));
            }
            let mut guard = self.profile.lock().unwrap();
            let profile = guard.get_or_insert_with(PlanProfile::default);
            if is_over_limit(profile.usage.count_for(metric), limit) {
                return Ok(IncrementOutcome::AtLimit(profile.usage));
            }
            profile.usage = profile.usage.incremented(metric);
            Ok(IncrementOutcome::Recorded(profile.usage))
        }
    }

    fn handler(store: Arc<MockProfileStore>) -> AuthorizeMeteredActionHandler {
        AuthorizeMeteredActionHandler::new(store.clone(), store)
    }

    fn cmd(metric: UsageMetric) -> AuthorizeMeteredActionCommand {
        AuthorizeMeteredActionCommand {
            user_id: UserId::new("test-user-123").unwrap(),
            metric,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn first_free_meal_plan_is_allowed_and_counted() {
        let store = Arc::new(MockProfileStore::with(SubscriptionTier::Free, UsageSnapshot::new()));

        let result = handler(store.clone()).handle(cmd(UsageMetric::MealPlans)).await.unwrap();
        assert_eq!(result.tier, SubscriptionTier::Free);
        assert_eq!(result.limit, Limit::Capped(1));
        assert_eq!(result.usage.meal_plans_used, 1);
        assert_eq!(store.usage().meal_plans_used, 1);
    }

    #[tokio::test]
    async fn unlimited_metric_keeps_counting() {
        let usage = UsageSnapshot {
            smart_suggests_used: 250,
            ..UsageSnapshot::new()
        };
        let store = Arc::new(MockProfileStore::with(SubscriptionTier::Pro, usage));

        let result = handler(store).handle(cmd(UsageMetric::SmartSuggest)).await.unwrap();
        assert_eq!(result.limit, Limit::Unlimited);
        assert_eq!(result.usage.smart_suggests_used, 251);
    }

    #[tokio::test]
    async fn user_without_profile_gets_free_allowance() {
        let store = Arc::new(MockProfileStore::empty());

        let result = handler(store).handle(cmd(UsageMetric::SmartSuggest)).await.unwrap();
        assert_eq!(result.tier, SubscriptionTier::Free);
        assert_eq!(result.usage.smart_suggests_used, 1);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Denial Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn second_free_meal_plan_is_denied_without_counting() {
        let store = Arc::new(MockProfileStore::with(SubscriptionTier::Free, UsageSnapshot::new()));
        let handler = handler(store.clone());

        handler.handle(cmd(UsageMetric::MealPlans)).await.unwrap();
        let err = handler.handle(cmd(UsageMetric::MealPlans)).await.unwrap_err();

        assert_eq!(
            err,
            PlanError::limit_reached(UsageMetric::MealPlans, 1, Limit::Capped(1))
        );
        assert_eq!(store.usage().meal_plans_used, 1);
    }

    #[tokio::test]
    async fn pro_recipe_cap_is_inclusive() {
        let usage = UsageSnapshot {
            recipes_count: 100,
            ..UsageSnapshot::new()
        };
        let store = Arc::new(MockProfileStore::with(SubscriptionTier::Pro, usage));

        let result = handler(store).handle(cmd(UsageMetric::Recipes)).await;
        assert!(matches!(result, Err(PlanError::LimitReached { used: 100, .. })));
    }

    #[tokio::test]
    async fn concurrent_requests_cannot_exceed_free_cap() {
        let store = Arc::new(MockProfileStore::slow(SubscriptionTier::Free));
        let handler = handler(store.clone());

        let (a, b) = tokio::join!(
            handler.handle(cmd(UsageMetric::MealPlans)),
            handler.handle(cmd(UsageMetric::MealPlans)),
        );

        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert!(matches!(
            a.err().or(b.err()),
            Some(PlanError::LimitReached { used: 1, .. })
        ));
        assert_eq!(store.usage().meal_plans_used, 1);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn fails_when_recorder_fails() {
        let store = Arc::new(MockProfileStore::failing_writes(SubscriptionTier::Premium));

        let result = handler(store).handle(cmd(UsageMetric::MealPlans)).await;
        assert!(matches!(result, Err(PlanError::Infrastructure(_))));
    }
}
