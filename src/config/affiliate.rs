//! Affiliate partner configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::affiliate::AffiliateIds;

/// Configured partner ids and campaign source.
///
/// Ids set here are fallbacks; ids stored in the affiliate config store win.
#[derive(Debug, Clone, Deserialize)]
pub struct AffiliateConfig {
    pub instacart_id: Option<String>,
    pub walmart_id: Option<String>,
    pub amazon_tag: Option<String>,

    /// Value written to the `utm_source` parameter of every order link
    #[serde(default = "default_utm_source")]
    pub utm_source: String,
}

impl AffiliateConfig {
    pub fn ids(&self) -> AffiliateIds {
        AffiliateIds {
            instacart: self.instacart_id.clone(),
            walmart: self.walmart_id.clone(),
            amazon: self.amazon_tag.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.utm_source.trim().is_empty() {
            return Err(ValidationError::EmptyUtmSource);
        }
        Ok(())
    }
}

impl Default for AffiliateConfig {
    fn default() -> Self {
        Self {
            instacart_id: None,
            walmart_id: None,
            amazon_tag: None,
            utm_source: default_utm_source(),
        }
    }
}

fn default_utm_source() -> String {
    "swifteatz".to_string()
}
