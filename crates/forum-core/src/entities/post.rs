//! Post entity - a single message within a thread

use chrono::{DateTime, Utc};

use crate::value_objects::{PostId, ThreadId, UserId};

/// Maximum length of post content
pub const MAX_CONTENT_LEN: usize = 10_000;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub thread_id: ThreadId,
    /// Cleared (not cascaded) when the author's user record is removed
    pub author_id: Option<UserId>,
    pub content: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub is_edited: bool,
}

impl Post {
    /// Edit the post content, marking it as edited
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.is_edited = true;
        self.updated_date = Utc::now();
    }

    /// Check whether the author reference survives (false after the user
    /// record was removed)
    #[inline]
    pub fn has_author(&self) -> bool {
        self.author_id.is_some()
    }

    /// Get a truncated preview of the content
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}

/// Data for creating a post; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewPost {
    pub thread_id: ThreadId,
    pub author_id: Option<UserId>,
    pub content: String,
}
