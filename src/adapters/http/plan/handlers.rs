//! HTTP handlers for plan endpoints.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::application::handlers::plan::{AuthorizeMeteredActionCommand, GetPlanGateQuery};
use crate::domain::foundation::ValidationError;
use crate::domain::plan::{SubscriptionTier, UsageMetric};

use super::dto::{MeteredActionResponse, PlanGateResponse, TierLimitsResponse};
use crate::adapters::http::auth::AuthenticatedUser;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// GET /api/plan - Get the current user's plan gate
pub async fn get_plan(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let view = state
        .plan_gate_handler()
        .handle(GetPlanGateQuery {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(PlanGateResponse::from(view)))
}

/// GET /api/plan/limits/:tier - Get the entitlements for a tier
pub async fn get_tier_limits(Path(tier): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let tier: SubscriptionTier = tier
        .parse()
        .map_err(|reason: String| ValidationError::invalid_format("tier", reason))?;

    Ok(Json(TierLimitsResponse {
        tier,
        limits: tier.limits(),
    }))
}

/// POST /api/plan/usage/:metric - Authorize and count one metered action
pub async fn record_usage(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(metric): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let metric: UsageMetric = metric
        .parse()
        .map_err(|reason: String| ValidationError::invalid_format("metric", reason))?;

    let result = state
        .metered_action_handler()
        .handle(AuthorizeMeteredActionCommand {
            user_id: user.user_id,
            metric,
        })
        .await?;

    Ok(Json(MeteredActionResponse::from(result)))
}
