//! HTTP handlers for affiliate endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::affiliate::{
    GetAffiliateSummaryQuery, TrackAffiliateClickCommand,
};

use super::dto::{AffiliateSummaryResponse, TrackClickRequest, TrackClickResponse};
use crate::adapters::http::auth::AuthenticatedUser;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// POST /api/affiliate/click - Build and record a tracked order link
pub async fn track_click(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<TrackClickRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .track_click_handler()
        .handle(TrackAffiliateClickCommand {
            user_id: user.user_id,
            partner: request.partner,
            base_url: request.base_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TrackClickResponse::from(result))))
}

/// GET /api/affiliate/summary - Affiliate dashboard (admin only)
pub async fn get_summary(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .affiliate_summary_handler()
        .handle(GetAffiliateSummaryQuery { email: user.email })
        .await?;

    Ok(Json(AffiliateSummaryResponse::from(result)))
}
