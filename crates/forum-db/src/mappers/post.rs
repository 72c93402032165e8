//! Post entity <-> model mapper

use forum_core::{Post, PostId, ThreadId, UserId};

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            thread_id: ThreadId::new(model.thread_id),
            author_id: model.author_id.map(UserId::new),
            content: model.content,
            created_date: model.created_date,
            updated_date: model.updated_date,
            is_edited: model.is_edited,
        }
    }
}
