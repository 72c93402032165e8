//! Error handling utilities for repositories

use forum_core::error::DomainError;
use forum_core::value_objects::{CategoryId, PostId, ThreadId, UserId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::Database(e.to_string())
}

/// Check for foreign key violation (missing required parent) and return the
/// referential integrity error, or fallback to a database error
pub fn map_fk_violation<F>(e: SqlxError, on_missing_parent: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_missing_parent();
        }
    }
    DomainError::Database(e.to_string())
}

/// Create a "category not found" error
pub fn category_not_found(id: CategoryId) -> DomainError {
    DomainError::CategoryNotFound(id)
}

/// Create a "thread not found" error
pub fn thread_not_found(id: ThreadId) -> DomainError {
    DomainError::ThreadNotFound(id)
}

/// Create a "post not found" error
pub fn post_not_found(id: PostId) -> DomainError {
    DomainError::PostNotFound(id)
}

/// Create a "profile not found" error
pub fn profile_not_found(user_id: UserId) -> DomainError {
    DomainError::ProfileNotFound(user_id)
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}
