//! Public profile handlers

use axum::{
    extract::{Path, State},
    Json,
};
use forum_core::UserId;
use forum_service::{ProfileDetailResponse, ProfileService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Get a user's profile page with fresh thread and post counts
///
/// GET /profiles/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<ProfileDetailResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.get_detail(UserId::new(user_id)).await?;
    Ok(Json(response))
}
