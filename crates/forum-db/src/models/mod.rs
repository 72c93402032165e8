//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod post;
mod profile;
mod thread;
mod user;

pub use category::CategoryModel;
pub use post::PostModel;
pub use profile::UserProfileModel;
pub use thread::ThreadModel;
pub use user::UserModel;
