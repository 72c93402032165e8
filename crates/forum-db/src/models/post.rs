//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub thread_id: i64,
    pub author_id: Option<i64>,
    pub content: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub is_edited: bool,
}
