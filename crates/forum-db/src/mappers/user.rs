//! User entity <-> model mapper

use forum_core::{User, UserId};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            created_date: model.created_date,
        }
    }
}
