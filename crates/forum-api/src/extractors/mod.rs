//! Custom Axum extractors

pub mod identity;
pub mod pagination;
pub mod validated;

pub use identity::{CurrentUser, USER_ID_HEADER};
pub use pagination::PageQuery;
pub use validated::ValidatedJson;
