//! Plan gating errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | LimitReached | 402 |
//! | FeatureNotIncluded | 403 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use thiserror::Error;

use super::{Feature, Limit, SubscriptionTier, UsageMetric};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised when a gated action is refused or cannot be checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("{} limit reached ({used} of {limit})", .metric.display_name())]
    LimitReached {
        metric: UsageMetric,
        used: i64,
        limit: Limit,
    },

    #[error("{} requires the {required_tier} plan", .feature.display_name())]
    FeatureNotIncluded {
        feature: Feature,
        required_tier: SubscriptionTier,
    },

    #[error("Field '{field}' is invalid: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl PlanError {
    pub fn limit_reached(metric: UsageMetric, used: i64, limit: Limit) -> Self {
        PlanError::LimitReached {
            metric,
            used,
            limit,
        }
    }

    pub fn feature_not_included(feature: Feature) -> Self {
        PlanError::FeatureNotIncluded {
            feature,
            required_tier: SubscriptionTier::minimum_for(feature),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PlanError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PlanError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::LimitReached { .. } => ErrorCode::LimitReached,
            PlanError::FeatureNotIncluded { .. } => ErrorCode::FeatureNotIncluded,
            PlanError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PlanError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Upgrade prompt shown to the user.
    pub fn upsell_message(&self) -> String {
        match self {
            PlanError::LimitReached { metric, limit, .. } if metric.resets_monthly() => format!(
                "You've used all {} of your monthly {}. Upgrade for more.",
                limit,
                metric.display_name()
            ),
            PlanError::LimitReached { metric, limit, .. } => format!(
                "You've saved {} {}, the most your plan allows. Upgrade for more.",
                limit,
                metric.display_name()
            ),
            PlanError::FeatureNotIncluded {
                feature,
                required_tier,
            } => format!(
                "{} is available on {} and above. Upgrade to unlock it.",
                feature.display_name(),
                required_tier.display_name()
            ),
            other => other.to_string(),
        }
    }
}

impl From<DomainError> for PlanError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => PlanError::ValidationFailed {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            _ => PlanError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for PlanError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } | ValidationError::InvalidFormat { field, .. } => {
                field.clone()
            }
        };
        PlanError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}
