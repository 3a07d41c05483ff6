//! Grocery ordering partners and their affiliate identifiers.

use serde::{Deserialize, Serialize};

/// A grocery service the shopping list can be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partner {
    Instacart,
    Walmart,
    Amazon,
}

impl Partner {
    /// Query parameter carrying our affiliate id on this partner's links.
    pub fn tracking_param(&self) -> &'static str {
        match self {
            Partner::Instacart => "aff_id",
            Partner::Walmart => "affp1",
            Partner::Amazon => "tag",
        }
    }

    /// Returns the storage key for this partner.
    pub fn as_str(&self) -> &'static str {
        match self {
            Partner::Instacart => "instacart",
            Partner::Walmart => "walmart",
            Partner::Amazon => "amazon",
        }
    }
}

impl std::fmt::Display for Partner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Affiliate ids per partner. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateIds {
    #[serde(default)]
    pub instacart: Option<String>,
    #[serde(default)]
    pub walmart: Option<String>,
    #[serde(default)]
    pub amazon: Option<String>,
}

impl AffiliateIds {
    /// The id for a partner, if one is set and non-empty.
    pub fn for_partner(&self, partner: Partner) -> Option<&str> {
        let id = match partner {
            Partner::Instacart => &self.instacart,
            Partner::Walmart => &self.walmart,
            Partner::Amazon => &self.amazon,
        };
        id.as_deref().filter(|value| !value.is_empty())
    }

    /// Fills every unset id from `fallback`.
    pub fn or(&self, fallback: &AffiliateIds) -> AffiliateIds {
        let pick = |partner: Partner| {
            self.for_partner(partner)
                .or_else(|| fallback.for_partner(partner))
                .map(str::to_string)
        };
        AffiliateIds {
            instacart: pick(Partner::Instacart),
            walmart: pick(Partner::Walmart),
            amazon: pick(Partner::Amazon),
        }
    }
}
