//! Thread entity - a discussion topic within a category

use chrono::{DateTime, Utc};

use crate::value_objects::{CategoryId, ThreadId, UserId};

/// Maximum length of a thread title
pub const MAX_TITLE_LEN: usize = 200;

/// Discussion thread entity
///
/// A thread belongs to exactly one category for its entire lifetime
/// (re-parenting is not modeled). `views` is a monotonic counter; the store
/// increments it in place, never through this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    pub category_id: CategoryId,
    /// Cleared (not cascaded) when the author's user record is removed
    pub author_id: Option<UserId>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub is_pinned: bool,
    pub is_locked: bool,
    pub views: i32,
}

impl Thread {
    /// Check whether new posts are accepted
    #[inline]
    pub fn is_open(&self) -> bool {
        !self.is_locked
    }

    /// Update the thread title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_date = Utc::now();
    }

    /// Toggle the pinned flag (no transition rules, toggled directly)
    pub fn set_pinned(&mut self, pinned: bool) {
        self.is_pinned = pinned;
        self.updated_date = Utc::now();
    }

    /// Toggle the locked flag
    pub fn set_locked(&mut self, locked: bool) {
        self.is_locked = locked;
        self.updated_date = Utc::now();
    }
}

/// Data for creating a thread; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewThread {
    pub title: String,
    pub category_id: CategoryId,
    pub author_id: Option<UserId>,
}
