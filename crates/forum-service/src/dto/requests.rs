//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Category Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 200, message = "Category name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default)]
    pub description: String,
}

/// Update category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 200, message = "Category name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Thread Requests
// ============================================================================

/// Create thread request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThreadRequest {
    #[validate(length(min = 1, max = 200, message = "Thread title must be 1-200 characters"))]
    pub title: String,

    pub category_id: i64,
}

/// Update thread request (title and moderation flags)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateThreadRequest {
    #[validate(length(min = 1, max = 200, message = "Thread title must be 1-200 characters"))]
    pub title: Option<String>,

    pub is_pinned: Option<bool>,
    pub is_locked: Option<bool>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request (thread comes from the URL path)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 10000, message = "Post content must be 1-10000 characters"))]
    pub content: String,
}

/// Update post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 10000, message = "Post content must be 1-10000 characters"))]
    pub content: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Create or replace profile request
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpsertProfileRequest {
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: Option<String>,

    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,

    #[validate(length(max = 500, message = "Avatar must be at most 500 characters"))]
    pub avatar: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Register a user reference
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,
}

// ============================================================================
// List Parameters
// ============================================================================

/// Page-number pagination parameters from the query string
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct PageParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PageParams {
    /// Resolve to a concrete (page, per_page) pair, clamping per_page to
    /// 1..=100
    pub fn resolve(self, default_per_page: i64) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(default_per_page).clamp(1, 100);
        (page, per_page)
    }
}

/// Admin search/filter parameters from the query string
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdminListParams {
    pub q: Option<String>,
    pub category_id: Option<i64>,
    pub pinned: Option<bool>,
    pub locked: Option<bool>,
    pub edited: Option<bool>,
    pub created_after: Option<chrono::DateTime<chrono::Utc>>,
    pub created_before: Option<chrono::DateTime<chrono::Utc>>,
    /// Thread sort order: "created" (default) or "updated", pinned first
    /// either way
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl AdminListParams {
    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_defaults() {
        let (page, per_page) = PageParams::default().resolve(20);
        assert_eq!(page, 1);
        assert_eq!(per_page, 20);
    }

    #[test]
    fn test_page_params_clamped() {
        let params = PageParams {
            page: Some(0),
            per_page: Some(1000),
        };
        let (page, per_page) = params.resolve(20);
        assert_eq!(page, 1);
        assert_eq!(per_page, 100);
    }

    #[test]
    fn test_create_category_validation() {
        let valid = CreateCategoryRequest {
            name: "General".to_string(),
            description: "General discussion".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateCategoryRequest {
            name: String::new(),
            description: String::new(),
        };
        assert!(empty_name.validate().is_err());

        let long_name = CreateCategoryRequest {
            name: "x".repeat(201),
            description: String::new(),
        };
        assert!(long_name.validate().is_err());
    }

    #[test]
    fn test_post_content_bounds() {
        let valid = CreatePostRequest {
            content: "hi".to_string(),
        };
        assert!(valid.validate().is_ok());

        let too_long = CreatePostRequest {
            content: "x".repeat(10_001),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_profile_website_url() {
        let valid = UpsertProfileRequest {
            website: Some("https://example.com".to_string()),
            ..UpsertProfileRequest::default()
        };
        assert!(valid.validate().is_ok());

        let invalid = UpsertProfileRequest {
            website: Some("not a url".to_string()),
            ..UpsertProfileRequest::default()
        };
        assert!(invalid.validate().is_err());
    }
}
