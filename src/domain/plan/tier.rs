//! Subscription tier definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Entitlements;

/// Subscription tier stored on the user's profile.
///
/// Determines quotas and feature access through [`Entitlements::for_tier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// One meal plan and one smart suggestion a month, five saved recipes.
    #[default]
    Free,

    /// Ten meal plans a month, unlimited suggestions, list export and ordering.
    Pro,

    /// Everything unlimited.
    Premium,
}

impl SubscriptionTier {
    /// All tiers, cheapest first.
    pub const ALL: [SubscriptionTier; 3] = [
        SubscriptionTier::Free,
        SubscriptionTier::Pro,
        SubscriptionTier::Premium,
    ];

    /// Resolves the tier column of a profile row.
    ///
    /// Missing or unrecognized values fall back to `Free`.
    pub fn from_profile_value(value: Option<&str>) -> Self {
        match value {
            None => SubscriptionTier::Free,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(tier = raw, "Unrecognized subscription tier, treating as free");
                SubscriptionTier::Free
            }),
        }
    }

    /// Returns the storage key for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Pro => "pro",
            SubscriptionTier::Premium => "premium",
        }
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "Free",
            SubscriptionTier::Pro => "Pro",
            SubscriptionTier::Premium => "Premium",
        }
    }

    /// Entitlements granted by this tier.
    pub const fn limits(&self) -> Entitlements {
        Entitlements::for_tier(*self)
    }

    /// Cheapest tier that includes the given feature.
    pub fn minimum_for(feature: Feature) -> SubscriptionTier {
        Self::ALL
            .into_iter()
            .find(|tier| tier.limits().allows(feature))
            .unwrap_or(SubscriptionTier::Premium)
    }
}

impl FromStr for SubscriptionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(SubscriptionTier::Free),
            "pro" => Ok(SubscriptionTier::Pro),
            "premium" => Ok(SubscriptionTier::Premium),
            other => Err(format!("unknown subscription tier '{}'", other)),
        }
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Boolean features switched on per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Exporting the grocery list.
    ExportList,
    /// Sending the list to a grocery partner.
    Ordering,
}

impl Feature {
    /// Returns the display name for this feature.
    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::ExportList => "Grocery list export",
            Feature::Ordering => "Grocery ordering",
        }
    }
}
