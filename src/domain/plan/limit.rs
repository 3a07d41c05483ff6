//! Usage allowance and the over-limit check.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Allowance for a metered counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// At most this many units.
    Capped(u32),
    /// No cap.
    Unlimited,
}

impl Limit {
    /// Returns true if there is no cap.
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Limit::Unlimited)
    }

    /// Returns the cap, or None when unlimited.
    pub fn cap(&self) -> Option<u32> {
        match self {
            Limit::Capped(max) => Some(*max),
            Limit::Unlimited => None,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Capped(max) => write!(f, "{}", max),
            Limit::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Returns true when `used` has reached `limit`.
///
/// The boundary is inclusive: a counter equal to the cap is already over,
/// which blocks the action that would create the (cap + 1)-th unit.
/// Unlimited allowances are never exceeded, whatever the counter holds.
pub fn is_over_limit(used: i64, limit: Limit) -> bool {
    match limit {
        Limit::Unlimited => false,
        Limit::Capped(max) => used >= i64::from(max),
    }
}

// Wire form: a bare number or the string "unlimited".

impl Serialize for Limit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Limit::Capped(max) => serializer.serialize_u32(*max),
            Limit::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

impl<'de> Deserialize<'de> for Limit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Capped(u32),
            Keyword(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Capped(max) => Ok(Limit::Capped(max)),
            Repr::Keyword(word) if word == "unlimited" => Ok(Limit::Unlimited),
            Repr::Keyword(word) => Err(de::Error::custom(format!(
                "expected a number or \"unlimited\", got \"{}\"",
                word
            ))),
        }
    }
}
