//! # forum-core
//!
//! Domain layer containing entities, typed ids, repository traits, and the
//! admin schema declarations. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod admin;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use admin::{AdminEntity, ADMIN_ENTITIES};
pub use entities::{
    Category, NewCategory, NewPost, NewThread, NewUser, NewUserProfile, Post, Thread, User,
    UserProfile,
};
pub use error::DomainError;
pub use traits::{
    CategoryQuery, CategoryRepository, Page, PostQuery, PostRepository, ProfileQuery,
    ProfileRepository, RepoResult, ThreadQuery, ThreadRepository, ThreadSort, UserRepository,
};
pub use value_objects::{CategoryId, IdParseError, PostId, ThreadId, UserId};
