//! Thread entity <-> model mapper

use forum_core::{CategoryId, Thread, ThreadId, UserId};

use crate::models::ThreadModel;

impl From<ThreadModel> for Thread {
    fn from(model: ThreadModel) -> Self {
        Thread {
            id: ThreadId::new(model.id),
            title: model.title,
            category_id: CategoryId::new(model.category_id),
            author_id: model.author_id.map(UserId::new),
            created_date: model.created_date,
            updated_date: model.updated_date,
            is_pinned: model.is_pinned,
            is_locked: model.is_locked,
            views: model.views,
        }
    }
}
