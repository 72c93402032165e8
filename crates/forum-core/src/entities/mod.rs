//! Domain entities - core forum objects

mod category;
mod post;
mod profile;
mod thread;
mod user;

pub use category::{Category, NewCategory};
pub use post::{NewPost, Post};
pub use profile::{NewUserProfile, UserProfile};
pub use thread::{NewThread, Thread};
pub use user::{NewUser, User};
