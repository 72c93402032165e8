//! Administrative management handlers
//!
//! CRUD over all managed entity types plus users, list screens with
//! search/filter/sort, and the static admin schema declaration.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use forum_core::admin::{admin_entity, ADMIN_ENTITIES};
use forum_core::{CategoryId, PostId, ThreadId, UserId};
use forum_service::{
    AdminEntityResponse, AdminListParams, CategoryDetailResponse, CategoryResponse,
    CategoryService, CreateCategoryRequest, CreatePostRequest, CreateThreadRequest,
    CreateUserRequest, PaginatedResponse, PostResponse, PostService, ProfileResponse,
    ProfileService, ServiceError, ThreadDetailResponse, ThreadResponse, ThreadService,
    UpdateCategoryRequest, UpdatePostRequest, UpdateThreadRequest, UpsertProfileRequest,
    UserResponse, UserService,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

// ============================================================================
// Schema
// ============================================================================

/// The static admin schema declaration for all managed entities
///
/// GET /admin/schema
pub async fn get_schema() -> Json<Vec<AdminEntityResponse>> {
    Json(ADMIN_ENTITIES.iter().map(AdminEntityResponse::from).collect())
}

/// One entity's admin schema declaration
///
/// GET /admin/schema/{entity}
pub async fn get_schema_entity(
    Path(entity): Path<String>,
) -> ApiResult<Json<AdminEntityResponse>> {
    let declaration = admin_entity(&entity)
        .ok_or_else(|| ApiError::Service(ServiceError::not_found("Admin entity", entity)))?;
    Ok(Json(AdminEntityResponse::from(declaration)))
}

// ============================================================================
// Categories
// ============================================================================

/// Admin category list with search over name and description
///
/// GET /admin/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> ApiResult<Json<PaginatedResponse<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.admin_search(&params).await?;
    Ok(Json(response))
}

/// Create a category
///
/// POST /admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Get one category
///
/// GET /admin/categories/{category_id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> ApiResult<Json<CategoryDetailResponse>> {
    let service = CategoryService::new(state.service_context());
    let response = service.get(CategoryId::new(category_id)).await?;
    Ok(Json(response))
}

/// Update a category
///
/// PATCH /admin/categories/{category_id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    let response = service.update(CategoryId::new(category_id), request).await?;
    Ok(Json(response))
}

/// Delete a category, cascading to its threads and posts
///
/// DELETE /admin/categories/{category_id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = CategoryService::new(state.service_context());
    service.delete(CategoryId::new(category_id)).await?;
    Ok(NoContent)
}

// ============================================================================
// Threads
// ============================================================================

/// Admin thread list with title search and filters
///
/// GET /admin/threads
pub async fn list_threads(
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> ApiResult<Json<PaginatedResponse<ThreadResponse>>> {
    let service = ThreadService::new(state.service_context());
    let response = service.admin_search(&params).await?;
    Ok(Json(response))
}

/// Create a thread. The identity header supplies the author when present.
///
/// POST /admin/threads
pub async fn create_thread(
    State(state): State<AppState>,
    CurrentUser(author_id): CurrentUser,
    ValidatedJson(request): ValidatedJson<CreateThreadRequest>,
) -> ApiResult<Created<Json<ThreadResponse>>> {
    let service = ThreadService::new(state.service_context());
    let response = service.create(author_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get one thread with its aggregates, without counting a visit
///
/// GET /admin/threads/{thread_id}
pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<i64>,
) -> ApiResult<Json<ThreadDetailResponse>> {
    let service = ThreadService::new(state.service_context());
    let response = service.detail(ThreadId::new(thread_id)).await?;
    Ok(Json(response))
}

/// Update a thread's title and moderation flags
///
/// PATCH /admin/threads/{thread_id}
pub async fn update_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateThreadRequest>,
) -> ApiResult<Json<ThreadResponse>> {
    let service = ThreadService::new(state.service_context());
    let response = service.update(ThreadId::new(thread_id), request).await?;
    Ok(Json(response))
}

/// Delete a thread, cascading to its posts
///
/// DELETE /admin/threads/{thread_id}
pub async fn delete_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = ThreadService::new(state.service_context());
    service.delete(ThreadId::new(thread_id)).await?;
    Ok(NoContent)
}

// ============================================================================
// Posts
// ============================================================================

/// Admin post list with content/author search and filters
///
/// GET /admin/posts
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> ApiResult<Json<PaginatedResponse<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.admin_search(&params).await?;
    Ok(Json(response))
}

/// Create a post in a thread. The identity header supplies the author when
/// present. Locked threads reject new posts.
///
/// POST /admin/threads/{thread_id}/posts
pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(author_id): CurrentUser,
    Path(thread_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service
        .create(ThreadId::new(thread_id), author_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Replace a post's content, flagging it as edited
///
/// PATCH /admin/posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.update(PostId::new(post_id), request).await?;
    Ok(Json(response))
}

/// Delete a post
///
/// DELETE /admin/posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete(PostId::new(post_id)).await?;
    Ok(NoContent)
}

// ============================================================================
// Profiles
// ============================================================================

/// Admin profile list with username/location search
///
/// GET /admin/profiles
pub async fn list_profiles(
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> ApiResult<Json<PaginatedResponse<ProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    let response = service.admin_search(&params).await?;
    Ok(Json(response))
}

/// Create or replace a user's profile
///
/// PUT /admin/profiles/{user_id}
pub async fn upsert_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpsertProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.upsert(UserId::new(user_id), request).await?;
    Ok(Json(response))
}

/// Delete a user's profile
///
/// DELETE /admin/profiles/{user_id}
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = ProfileService::new(state.service_context());
    service.delete(UserId::new(user_id)).await?;
    Ok(NoContent)
}

// ============================================================================
// Users
// ============================================================================

/// Register a user reference
///
/// POST /admin/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Get a user
///
/// GET /admin/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get(UserId::new(user_id)).await?;
    Ok(Json(response))
}

/// Remove a user. Their content survives anonymously; their profile goes
/// with them.
///
/// DELETE /admin/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete(UserId::new(user_id)).await?;
    Ok(NoContent)
}
