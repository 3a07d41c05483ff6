//! HTTP handlers for grocery endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::grocery::{BuildShoppingListCommand, ExportShoppingListCommand};

use super::dto::{ExportResponse, ShoppingListRequest, ShoppingListResponse};
use crate::adapters::http::auth::AuthenticatedUser;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// POST /api/grocery/list - Build a shopping list
pub async fn build_list(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(request): Json<ShoppingListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.build_list_handler().handle(BuildShoppingListCommand {
        items: request.items,
        scale_factor: request.scale_factor,
    })?;

    Ok(Json(ShoppingListResponse {
        items: result.items,
    }))
}

/// POST /api/grocery/export - Export a shopping list
pub async fn export_list(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<ShoppingListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .export_list_handler()
        .handle(ExportShoppingListCommand {
            user_id: user.user_id,
            items: request.items,
            scale_factor: request.scale_factor,
        })
        .await?;

    Ok(Json(ExportResponse::new(result.items, result.lines)))
}
