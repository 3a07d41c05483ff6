//! Read port for the subscription fields of a user's profile.
//!
//! The profile row lives in the hosted data store; this port only reads a
//! snapshot. Staleness and row-level authorization are the store's concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::plan::{SubscriptionTier, UsageSnapshot};

/// Subscription fields of a profile row, as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanProfile {
    /// Raw `subscription_tier` column. May be missing or hold an unknown key.
    #[serde(default, rename = "subscription_tier")]
    pub tier: Option<String>,
    #[serde(flatten)]
    pub usage: UsageSnapshot,
}

impl PlanProfile {
    pub fn new(tier: SubscriptionTier, usage: UsageSnapshot) -> Self {
        Self {
            tier: Some(tier.as_str().to_string()),
            usage,
        }
    }

    /// Tier with unknown or missing values read as free.
    pub fn resolved_tier(&self) -> SubscriptionTier {
        SubscriptionTier::from_profile_value(self.tier.as_deref())
    }
}

/// Reader for profile subscription data.
#[async_trait]
pub trait PlanProfileReader: Send + Sync {
    /// Returns the profile's tier and usage counters, or None if the user
    /// has no profile yet.
    async fn get_plan_profile(&self, user_id: &UserId) -> Result<Option<PlanProfile>, DomainError>;
}
