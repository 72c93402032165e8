//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response with page-number pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: i64, per_page: i64, total: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta {
                page,
                per_page,
                total,
                total_pages: if total == 0 {
                    0
                } else {
                    (total + per_page - 1) / per_page
                },
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

// ============================================================================
// Category Responses
// ============================================================================

/// Basic category response
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
}

/// Category with its thread count (always computed fresh)
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetailResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
    pub thread_count: i64,
}

// ============================================================================
// Thread Responses
// ============================================================================

/// Basic thread response
#[derive(Debug, Clone, Serialize)]
pub struct ThreadResponse {
    pub id: i64,
    pub title: String,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub is_pinned: bool,
    pub is_locked: bool,
    pub views: i32,
}

/// Thread with its aggregates (post count and newest post)
#[derive(Debug, Serialize)]
pub struct ThreadDetailResponse {
    #[serde(flatten)]
    pub thread: ThreadResponse,
    pub post_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_post: Option<PostResponse>,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub thread_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    pub content: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub is_edited: bool,
}

// ============================================================================
// Profile and User Responses
// ============================================================================

/// Profile response
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub joined_date: DateTime<Utc>,
}

/// Profile with the user's participation counts (always computed fresh)
#[derive(Debug, Serialize)]
pub struct ProfileDetailResponse {
    pub user_id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub joined_date: DateTime<Utc>,
    pub thread_count: i64,
    pub post_count: i64,
}

/// User response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub created_date: DateTime<Utc>,
}

// ============================================================================
// Summary Responses
// ============================================================================

/// Forum-wide summary for the index page
#[derive(Debug, Serialize)]
pub struct ForumSummaryResponse {
    pub category_count: i64,
    pub thread_count: i64,
    pub post_count: i64,
    pub user_count: i64,
    pub recent_threads: Vec<ThreadResponse>,
}

// ============================================================================
// Admin Schema Responses
// ============================================================================

/// One entity's admin schema declaration
#[derive(Debug, Serialize)]
pub struct AdminEntityResponse {
    pub entity: &'static str,
    pub display_fields: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    pub filter_fields: &'static [&'static str],
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Readiness response (includes dependency checks)
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}
