//! Service context - dependency container for services
//!
//! Holds the database pool and all repositories needed by services. Built
//! explicitly at startup and passed down; nothing here is global state.

use std::sync::Arc;

use forum_core::traits::{
    CategoryRepository, PostRepository, ProfileRepository, ThreadRepository, UserRepository,
};
use forum_db::{
    PgCategoryRepository, PgPostRepository, PgProfileRepository, PgThreadRepository,
    PgUserRepository,
};
use sqlx::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    category_repo: Arc<dyn CategoryRepository>,
    thread_repo: Arc<dyn ThreadRepository>,
    post_repo: Arc<dyn PostRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl ServiceContext {
    /// Create a new service context with explicit repositories
    pub fn new(
        pool: PgPool,
        category_repo: Arc<dyn CategoryRepository>,
        thread_repo: Arc<dyn ThreadRepository>,
        post_repo: Arc<dyn PostRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            pool,
            category_repo,
            thread_repo,
            post_repo,
            profile_repo,
            user_repo,
        }
    }

    /// Create a context backed by the PostgreSQL repositories
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(PgCategoryRepository::new(pool.clone())),
            Arc::new(PgThreadRepository::new(pool.clone())),
            Arc::new(PgPostRepository::new(pool.clone())),
            Arc::new(PgProfileRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
        )
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the thread repository
    pub fn thread_repo(&self) -> &dyn ThreadRepository {
        self.thread_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}
