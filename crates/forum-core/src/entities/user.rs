//! User reference - minimal mirror of the external identity collaborator
//!
//! The forum core never authenticates; it only stores the foreign reference
//! and the username needed for admin search and profile pages.

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User record as known to the forum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created_date: DateTime<Utc>,
}

/// Data for registering a user reference
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
}
