//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CategoryId, PostId, ThreadId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Thread not found: {0}")]
    ThreadNotFound(ThreadId),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Profile not found for user: {0}")]
    ProfileNotFound(UserId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    // =========================================================================
    // Uniqueness / Referential Integrity
    // =========================================================================
    #[error("Category '{0}' already exists (case insensitive match)")]
    DuplicateCategoryName(String),

    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Website is not a valid URL")]
    InvalidWebsiteUrl,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::ThreadNotFound(_) => "UNKNOWN_THREAD",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            Self::DuplicateCategoryName(_) => "DUPLICATE_CATEGORY_NAME",
            Self::DuplicateUsername(_) => "DUPLICATE_USERNAME",
            Self::ReferentialIntegrity(_) => "REFERENTIAL_INTEGRITY",

            Self::Validation(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidWebsiteUrl => "INVALID_WEBSITE_URL",

            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound(_)
                | Self::ThreadNotFound(_)
                | Self::PostNotFound(_)
                | Self::ProfileNotFound(_)
                | Self::UserNotFound(_)
        )
    }

    /// Check if this is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateCategoryName(_) | Self::DuplicateUsername(_)
        )
    }

    /// Check if this is a validation error (including broken required
    /// references, surfaced as a client error)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::ContentTooLong { .. }
                | Self::InvalidWebsiteUrl
                | Self::ReferentialIntegrity(_)
        )
    }
}
