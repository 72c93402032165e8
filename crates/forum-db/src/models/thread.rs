//! Thread database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the threads table
#[derive(Debug, Clone, FromRow)]
pub struct ThreadModel {
    pub id: i64,
    pub title: String,
    pub category_id: i64,
    pub author_id: Option<i64>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub is_pinned: bool,
    pub is_locked: bool,
    pub views: i32,
}
