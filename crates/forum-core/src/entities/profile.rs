//! UserProfile entity - supplementary attributes attached one-to-one to a user

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Maximum length of a profile bio
pub const MAX_BIO_LEN: usize = 500;
/// Maximum length of a profile location
pub const MAX_LOCATION_LEN: usize = 100;
/// Maximum length of an avatar URL
pub const MAX_AVATAR_LEN: usize = 500;

/// Extended user profile, keyed by the owning user's id
///
/// Deleted together with the user record (cascading one-to-one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: UserId,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar: Option<String>,
    pub joined_date: DateTime<Utc>,
}

impl UserProfile {
    /// Check if any optional field is filled in
    pub fn is_filled(&self) -> bool {
        self.bio.is_some()
            || self.location.is_some()
            || self.website.is_some()
            || self.avatar.is_some()
    }
}

/// Data for creating a profile; the store assigns the joined date
#[derive(Debug, Clone, Default)]
pub struct NewUserProfile {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar: Option<String>,
}
