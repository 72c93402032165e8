//! Data transfer objects
//!
//! Request DTOs carry validated input from the API layer; response DTOs
//! shape entities for JSON output.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
