//! Request handlers organized by domain

pub mod admin;
pub mod categories;
pub mod health;
pub mod posts;
pub mod profiles;
pub mod summary;
pub mod threads;
