//! Affiliate-specific error types.

use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::plan::PlanError;

/// Errors raised while building or recording affiliate links.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AffiliateError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error(transparent)]
    Gated(#[from] PlanError),

    #[error("Admin access required")]
    AdminRequired,

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl AffiliateError {
    pub fn invalid_url(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        AffiliateError::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AffiliateError::Infrastructure(message.into())
    }
}

impl From<DomainError> for AffiliateError {
    fn from(err: DomainError) -> Self {
        AffiliateError::Infrastructure(err.to_string())
    }
}
