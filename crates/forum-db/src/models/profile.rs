//! UserProfile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the user_profiles table
#[derive(Debug, Clone, FromRow)]
pub struct UserProfileModel {
    pub user_id: i64,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar: Option<String>,
    pub joined_date: DateTime<Utc>,
}
