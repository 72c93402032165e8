//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Aggregate queries (`thread_count`,
//! `post_count`, `last_post`, per-author counts) are read-only and must
//! reflect store state at call time - no caching, every call is a fresh
//! query.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Category, NewCategory, NewPost, NewThread, NewUser, NewUserProfile, Post, Thread, User,
    UserProfile,
};
use crate::error::DomainError;
use crate::value_objects::{CategoryId, PostId, ThreadId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Offset pagination window for list queries
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// First `limit` rows
    pub fn first(limit: i64) -> Self {
        Self { limit, offset: 0 }
    }
}

// ============================================================================
// Admin query filters
// ============================================================================

/// Admin search over categories (name, description)
#[derive(Debug, Clone, Default)]
pub struct CategoryQuery {
    pub search: Option<String>,
}

/// Sort orders for thread listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadSort {
    /// Pinned first, then most recently updated (public default ordering)
    #[default]
    PinnedUpdated,
    /// Pinned first, then most recently created (admin default ordering)
    PinnedCreated,
}

/// Admin search/filter over threads
#[derive(Debug, Clone, Default)]
pub struct ThreadQuery {
    /// Substring match on title
    pub search: Option<String>,
    pub category_id: Option<CategoryId>,
    pub pinned: Option<bool>,
    pub locked: Option<bool>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub sort: ThreadSort,
}

/// Admin search/filter over posts
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    /// Substring match on content or author username
    pub search: Option<String>,
    pub edited: Option<bool>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

/// Admin search over profiles (username, location)
#[derive(Debug, Clone, Default)]
pub struct ProfileQuery {
    pub search: Option<String>,
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by id
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>>;

    /// List categories ordered by name ascending
    async fn list(&self, page: Page) -> RepoResult<Vec<Category>>;

    /// Total number of categories
    async fn count(&self) -> RepoResult<i64>;

    /// Number of threads in a category
    async fn thread_count(&self, id: CategoryId) -> RepoResult<i64>;

    /// Create a category; fails with `DuplicateCategoryName` when the name
    /// collides case-insensitively with an existing row
    async fn create(&self, new: NewCategory) -> RepoResult<Category>;

    /// Update name/description; same uniqueness rule as `create`
    async fn update(&self, category: &Category) -> RepoResult<()>;

    /// Delete a category, cascading to its threads and their posts
    async fn delete(&self, id: CategoryId) -> RepoResult<()>;

    /// Admin search, ordered by name ascending
    async fn search(&self, query: &CategoryQuery, page: Page) -> RepoResult<Vec<Category>>;

    /// Number of rows matching an admin search
    async fn count_matching(&self, query: &CategoryQuery) -> RepoResult<i64>;
}

// ============================================================================
// Thread Repository
// ============================================================================

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Find thread by id
    async fn find_by_id(&self, id: ThreadId) -> RepoResult<Option<Thread>>;

    /// List threads in default ordering (pinned first, then most recently
    /// updated)
    async fn list(&self, page: Page) -> RepoResult<Vec<Thread>>;

    /// Total number of threads
    async fn count(&self) -> RepoResult<i64>;

    /// List threads of one category, default ordering
    async fn find_by_category(&self, category_id: CategoryId, page: Page)
        -> RepoResult<Vec<Thread>>;

    /// Number of threads authored by a user
    async fn count_by_author(&self, author_id: UserId) -> RepoResult<i64>;

    /// Newest threads by creation date (index summary)
    async fn recent(&self, limit: i64) -> RepoResult<Vec<Thread>>;

    /// Atomically increment the view counter by exactly 1, touching no other
    /// field (`updated_date` included). Fails with `ThreadNotFound` when the
    /// id does not resolve.
    async fn increment_views(&self, id: ThreadId) -> RepoResult<()>;

    /// Create a thread; fails with `ReferentialIntegrity` when the category
    /// does not exist
    async fn create(&self, new: NewThread) -> RepoResult<Thread>;

    /// Update title and flags, refreshing `updated_date`
    async fn update(&self, thread: &Thread) -> RepoResult<()>;

    /// Delete a thread, cascading to its posts
    async fn delete(&self, id: ThreadId) -> RepoResult<()>;

    /// Admin search/filter
    async fn search(&self, query: &ThreadQuery, page: Page) -> RepoResult<Vec<Thread>>;

    /// Number of rows matching an admin search
    async fn count_matching(&self, query: &ThreadQuery) -> RepoResult<i64>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by id
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// List posts of a thread in chronological order (creation time
    /// ascending, id as stable tie-break)
    async fn find_by_thread(&self, thread_id: ThreadId, page: Page) -> RepoResult<Vec<Post>>;

    /// Total number of posts
    async fn count(&self) -> RepoResult<i64>;

    /// Number of posts in a thread
    async fn post_count(&self, thread_id: ThreadId) -> RepoResult<i64>;

    /// The most recently created post of a thread, or None when the thread
    /// has no posts. Ties on `created_date` resolve by highest id (stable,
    /// implementation-defined).
    async fn last_post(&self, thread_id: ThreadId) -> RepoResult<Option<Post>>;

    /// Number of posts authored by a user
    async fn count_by_author(&self, author_id: UserId) -> RepoResult<i64>;

    /// Create a post; fails with `ReferentialIntegrity` when the thread does
    /// not exist
    async fn create(&self, new: NewPost) -> RepoResult<Post>;

    /// Replace the content, refreshing `updated_date` and setting
    /// `is_edited`
    async fn update_content(&self, id: PostId, content: &str) -> RepoResult<Post>;

    /// Delete a post
    async fn delete(&self, id: PostId) -> RepoResult<()>;

    /// Admin search/filter (content or author username)
    async fn search(&self, query: &PostQuery, page: Page) -> RepoResult<Vec<Post>>;

    /// Number of rows matching an admin search
    async fn count_matching(&self, query: &PostQuery) -> RepoResult<i64>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a user's profile
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<UserProfile>>;

    /// Create a profile for a user; fails with `ReferentialIntegrity` when
    /// the user does not exist
    async fn create(&self, user_id: UserId, new: NewUserProfile) -> RepoResult<UserProfile>;

    /// Update the optional profile fields
    async fn update(&self, profile: &UserProfile) -> RepoResult<()>;

    /// Delete a user's profile
    async fn delete(&self, user_id: UserId) -> RepoResult<()>;

    /// Admin search (username or location), ordered by join date
    async fn search(&self, query: &ProfileQuery, page: Page) -> RepoResult<Vec<UserProfile>>;

    /// Number of rows matching an admin search
    async fn count_matching(&self, query: &ProfileQuery) -> RepoResult<i64>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by id
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Total number of users
    async fn count(&self) -> RepoResult<i64>;

    /// Register a user reference
    async fn create(&self, new: NewUser) -> RepoResult<User>;

    /// Remove a user. Their threads and posts survive with the author
    /// reference cleared; their profile is removed with them.
    async fn delete(&self, id: UserId) -> RepoResult<()>;
}
