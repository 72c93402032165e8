//! # forum-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `forum-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - Repository implementations, including the atomic view-counter
//!   increment and the aggregate count/lookup queries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use forum_db::repositories::PgThreadRepository;
//! use forum_core::ThreadRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let thread_repo = PgThreadRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCategoryRepository, PgPostRepository, PgProfileRepository, PgThreadRepository,
    PgUserRepository,
};
