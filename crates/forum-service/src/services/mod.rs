//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod category;
pub mod context;
pub mod error;
pub mod post;
pub mod profile;
pub mod stats;
pub mod thread;
pub mod user;

// Re-export all services for convenience
pub use category::CategoryService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use profile::ProfileService;
pub use stats::StatsService;
pub use thread::ThreadService;
pub use user::UserService;

/// Default page size for category listings
pub const CATEGORY_PAGE_SIZE: i64 = 10;

/// Default page size for thread and post listings
pub const THREAD_PAGE_SIZE: i64 = 20;

/// Translate a 1-based page number into an offset window
pub(crate) fn page_window(page: i64, per_page: i64) -> forum_core::traits::Page {
    forum_core::traits::Page {
        limit: per_page,
        offset: (page - 1) * per_page,
    }
}
