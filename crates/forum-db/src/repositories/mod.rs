//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific domain entity.

mod category;
mod error;
mod post;
mod profile;
mod thread;
mod user;

pub use category::PgCategoryRepository;
pub use post::PgPostRepository;
pub use profile::PgProfileRepository;
pub use thread::PgThreadRepository;
pub use user::PgUserRepository;
