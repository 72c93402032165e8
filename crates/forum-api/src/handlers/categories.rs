//! Public category handlers
//!
//! Read-side endpoints mirroring the forum's category pages.

use axum::{
    extract::{Path, State},
    Json,
};
use forum_core::CategoryId;
use forum_service::{
    CategoryDetailResponse, CategoryService, PaginatedResponse, ThreadResponse, ThreadService,
};

use crate::extractors::PageQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// List categories with thread counts, name ascending
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    PageQuery(params): PageQuery,
) -> ApiResult<Json<PaginatedResponse<CategoryDetailResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.list(params).await?;
    Ok(Json(response))
}

/// Get one category with its thread count
///
/// GET /categories/{category_id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> ApiResult<Json<CategoryDetailResponse>> {
    let service = CategoryService::new(state.service_context());
    let response = service.get(CategoryId::new(category_id)).await?;
    Ok(Json(response))
}

/// List a category's threads, pinned first then most recently updated
///
/// GET /categories/{category_id}/threads
pub async fn list_category_threads(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    PageQuery(params): PageQuery,
) -> ApiResult<Json<PaginatedResponse<ThreadResponse>>> {
    let service = ThreadService::new(state.service_context());
    let response = service
        .list_by_category(CategoryId::new(category_id), params)
        .await?;
    Ok(Json(response))
}
