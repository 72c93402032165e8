//! UserProfile entity <-> model mapper

use forum_core::{UserId, UserProfile};

use crate::models::UserProfileModel;

impl From<UserProfileModel> for UserProfile {
    fn from(model: UserProfileModel) -> Self {
        UserProfile {
            user_id: UserId::new(model.user_id),
            bio: model.bio,
            location: model.location,
            website: model.website,
            avatar: model.avatar,
            joined_date: model.joined_date,
        }
    }
}
