//! Category entity - top-level grouping for threads

use chrono::{DateTime, Utc};

use crate::value_objects::CategoryId;

/// Maximum length of a category name
pub const MAX_NAME_LEN: usize = 200;
/// Maximum length of a category description
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Forum category entity
///
/// Category names are unique case-insensitively across all live rows; the
/// store enforces the constraint, [`Category::name_key`] gives the folded
/// form used for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
}

impl Category {
    /// Case-folded name used for uniqueness comparison
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Check whether another name collides with this category's name
    /// under case folding
    pub fn name_conflicts_with(&self, other: &str) -> bool {
        self.name_key() == other.to_lowercase()
    }
}

/// Data for creating a category; the store assigns id and creation date
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}
