//! HTTP error mapping.
//!
//! | Error | HTTP Status | Code |
//! |-------|-------------|------|
//! | Validation / bad URL | 400 | `VALIDATION_FAILED`, `INVALID_URL` |
//! | Missing caller | 401 | `UNAUTHORIZED` |
//! | Over a usage limit | 402 | `LIMIT_REACHED` |
//! | Feature not in tier, non-admin | 403 | `FEATURE_NOT_INCLUDED`, `FORBIDDEN` |
//! | Store failures | 500 | `INTERNAL_ERROR` |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::affiliate::AffiliateError;
use crate::domain::foundation::ValidationError;
use crate::domain::plan::PlanError;

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Plan(PlanError),
    Affiliate(AffiliateError),
    Validation(ValidationError),
}

impl From<PlanError> for ApiError {
    fn from(err: PlanError) -> Self {
        ApiError::Plan(err)
    }
}

impl From<AffiliateError> for ApiError {
    fn from(err: AffiliateError) -> Self {
        match err {
            AffiliateError::Gated(plan) => ApiError::Plan(plan),
            other => ApiError::Affiliate(other),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::Plan(err) => match err {
                PlanError::LimitReached { .. } => (
                    StatusCode::PAYMENT_REQUIRED,
                    ErrorResponse::new("LIMIT_REACHED", err.upsell_message()),
                ),
                PlanError::FeatureNotIncluded { .. } => (
                    StatusCode::FORBIDDEN,
                    ErrorResponse::new("FEATURE_NOT_INCLUDED", err.upsell_message()),
                ),
                PlanError::ValidationFailed { .. } => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("VALIDATION_FAILED", err.to_string()),
                ),
                PlanError::Infrastructure(_) => internal(err),
            },
            ApiError::Affiliate(err) => match err {
                AffiliateError::InvalidUrl { .. } => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("INVALID_URL", err.to_string()),
                ),
                AffiliateError::AdminRequired => (
                    StatusCode::FORBIDDEN,
                    ErrorResponse::new("FORBIDDEN", err.to_string()),
                ),
                AffiliateError::Gated(plan) => ApiError::Plan(plan.clone()).status_and_body(),
                AffiliateError::Infrastructure(_) => internal(err),
            },
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_FAILED", err.to_string()),
            ),
        }
    }
}

/// Store failures are logged in full and reported without detail.
fn internal(err: &dyn std::error::Error) -> (StatusCode, ErrorResponse) {
    tracing::error!(error = %err, "Request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new("INTERNAL_ERROR", "Internal server error"),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::{Feature, Limit, UsageMetric};

    fn status(err: impl Into<ApiError>) -> StatusCode {
        err.into().status_and_body().0
    }

    #[test]
    fn limit_reached_maps_to_402() {
        let err = PlanError::limit_reached(UsageMetric::MealPlans, 1, Limit::Capped(1));
        assert_eq!(status(err), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn missing_feature_maps_to_403() {
        assert_eq!(
            status(PlanError::feature_not_included(Feature::ExportList)),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn gated_affiliate_error_uses_plan_mapping() {
        let err = AffiliateError::from(PlanError::feature_not_included(Feature::Ordering));
        let (status, body) = ApiError::from(err).status_and_body();
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.code, "FEATURE_NOT_INCLUDED");
    }

    #[test]
    fn admin_required_maps_to_403() {
        assert_eq!(status(AffiliateError::AdminRequired), StatusCode::FORBIDDEN);
    }

    #[test]
    fn bad_input_maps_to_400() {
        assert_eq!(
            status(AffiliateError::invalid_url("nope", "relative URL without a base")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(ValidationError::invalid_format("scale_factor", "must be positive")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn infrastructure_error_hides_detail() {
        let (status, body) =
            ApiError::from(PlanError::infrastructure("connection refused")).status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal server error");
    }

    #[test]
    fn error_response_serializes_code_and_message() {
        let json = serde_json::to_value(ErrorResponse::new("FORBIDDEN", "nope")).unwrap();
        assert_eq!(json, serde_json::json!({"code": "FORBIDDEN", "message": "nope"}));
    }
}
