//! Value objects - typed identifiers

mod id;

pub use id::{CategoryId, IdParseError, PostId, ThreadId, UserId};
