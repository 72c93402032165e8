//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Suffixes combine a
//! timestamp with a process-local counter so fixtures stay unique across
//! test runs against the same database.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}", Utc::now().timestamp_micros(), counter)
}

// ============================================================================
// Requests
// ============================================================================

/// Create category request
#[derive(Debug, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: String,
}

impl CreateCategoryRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Category {suffix}"),
            description: "A test category".to_string(),
        }
    }
}

/// Update category request (all fields optional)
#[derive(Debug, Default, Serialize)]
pub struct UpdateCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Create thread request
#[derive(Debug, Serialize)]
pub struct CreateThreadRequest {
    pub title: String,
    pub category_id: i64,
}

impl CreateThreadRequest {
    pub fn in_category(category_id: i64) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Thread {suffix}"),
            category_id,
        }
    }
}

/// Update thread request (all fields optional)
#[derive(Debug, Default, Serialize)]
pub struct UpdateThreadRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub content: String,
}

impl CreatePostRequest {
    pub fn simple(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

/// Update post request
#[derive(Debug, Serialize)]
pub struct UpdatePostRequest {
    pub content: String,
}

/// Create user request
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser-{suffix}"),
        }
    }
}

/// Upsert profile request
#[derive(Debug, Default, Serialize)]
pub struct UpsertProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Category response
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_date: String,
}

/// Category with thread count
#[derive(Debug, Deserialize)]
pub struct CategoryDetailResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_date: String,
    pub thread_count: i64,
}

/// Thread response
#[derive(Debug, Deserialize)]
pub struct ThreadResponse {
    pub id: i64,
    pub title: String,
    pub category_id: i64,
    pub author_id: Option<i64>,
    pub created_date: String,
    pub updated_date: String,
    pub is_pinned: bool,
    pub is_locked: bool,
    pub views: i32,
}

/// Thread with aggregates
#[derive(Debug, Deserialize)]
pub struct ThreadDetailResponse {
    #[serde(flatten)]
    pub thread: ThreadResponse,
    pub post_count: i64,
    pub last_post: Option<PostResponse>,
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub thread_id: i64,
    pub author_id: Option<i64>,
    pub content: String,
    pub created_date: String,
    pub updated_date: String,
    pub is_edited: bool,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub user_id: i64,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar: Option<String>,
    pub joined_date: String,
}

/// Profile with participation counts
#[derive(Debug, Deserialize)]
pub struct ProfileDetailResponse {
    pub user_id: i64,
    pub username: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar: Option<String>,
    pub joined_date: String,
    pub thread_count: i64,
    pub post_count: i64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub created_date: String,
}

/// Forum summary response
#[derive(Debug, Deserialize)]
pub struct ForumSummaryResponse {
    pub category_count: i64,
    pub thread_count: i64,
    pub post_count: i64,
    pub user_count: i64,
    pub recent_threads: Vec<ThreadResponse>,
}

/// Admin schema entry
#[derive(Debug, Deserialize)]
pub struct AdminEntityResponse {
    pub entity: String,
    pub display_fields: Vec<String>,
    pub search_fields: Vec<String>,
    pub filter_fields: Vec<String>,
}

/// Paginated list response
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
