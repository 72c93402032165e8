//! Public post handlers

use axum::{
    extract::{Path, State},
    Json,
};
use forum_core::PostId;
use forum_service::{PostResponse, PostService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Get one post
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.get(PostId::new(post_id)).await?;
    Ok(Json(response))
}
