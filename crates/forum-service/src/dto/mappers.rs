//! Entity to response DTO mappers

use forum_core::admin::AdminEntity;
use forum_core::entities::{Category, Post, Thread, User, UserProfile};
use forum_core::value_objects::UserId;

use super::responses::{
    AdminEntityResponse, CategoryResponse, PostResponse, ProfileResponse, ThreadResponse,
    UserResponse,
};

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.into_inner(),
            name: category.name.clone(),
            description: category.description.clone(),
            created_date: category.created_date,
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}

impl From<&Thread> for ThreadResponse {
    fn from(thread: &Thread) -> Self {
        Self {
            id: thread.id.into_inner(),
            title: thread.title.clone(),
            category_id: thread.category_id.into_inner(),
            author_id: thread.author_id.map(UserId::into_inner),
            created_date: thread.created_date,
            updated_date: thread.updated_date,
            is_pinned: thread.is_pinned,
            is_locked: thread.is_locked,
            views: thread.views,
        }
    }
}

impl From<Thread> for ThreadResponse {
    fn from(thread: Thread) -> Self {
        Self::from(&thread)
    }
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.into_inner(),
            thread_id: post.thread_id.into_inner(),
            author_id: post.author_id.map(UserId::into_inner),
            content: post.content.clone(),
            created_date: post.created_date,
            updated_date: post.updated_date,
            is_edited: post.is_edited,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

impl From<&UserProfile> for ProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.user_id.into_inner(),
            bio: profile.bio.clone(),
            location: profile.location.clone(),
            website: profile.website.clone(),
            avatar: profile.avatar.clone(),
            joined_date: profile.joined_date,
        }
    }
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self::from(&profile)
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into_inner(),
            username: user.username.clone(),
            created_date: user.created_date,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&AdminEntity> for AdminEntityResponse {
    fn from(entity: &AdminEntity) -> Self {
        Self {
            entity: entity.entity,
            display_fields: entity.display_fields,
            search_fields: entity.search_fields,
            filter_fields: entity.filter_fields,
        }
    }
}
