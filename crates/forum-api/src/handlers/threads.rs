//! Public thread handlers
//!
//! Read-side endpoints for thread listings and the view-counting detail
//! page.

use axum::{
    extract::{Path, State},
    Json,
};
use forum_core::ThreadId;
use forum_service::{
    PaginatedResponse, PostResponse, PostService, ThreadDetailResponse, ThreadResponse,
    ThreadService,
};

use crate::extractors::PageQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// List all threads, pinned first then most recently updated
///
/// GET /threads
pub async fn list_threads(
    State(state): State<AppState>,
    PageQuery(params): PageQuery,
) -> ApiResult<Json<PaginatedResponse<ThreadResponse>>> {
    let service = ThreadService::new(state.service_context());
    let response = service.list(params).await?;
    Ok(Json(response))
}

/// Thread detail page. Counts the visit, then returns the thread with its
/// post count and newest post. The returned view count includes this visit.
///
/// GET /threads/{thread_id}
pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<i64>,
) -> ApiResult<Json<ThreadDetailResponse>> {
    let service = ThreadService::new(state.service_context());
    let response = service.view(ThreadId::new(thread_id)).await?;
    Ok(Json(response))
}

/// List a thread's posts in chronological order
///
/// GET /threads/{thread_id}/posts
pub async fn list_thread_posts(
    State(state): State<AppState>,
    Path(thread_id): Path<i64>,
    PageQuery(params): PageQuery,
) -> ApiResult<Json<PaginatedResponse<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service
        .list_by_thread(ThreadId::new(thread_id), params)
        .await?;
    Ok(Json(response))
}
