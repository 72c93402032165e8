//! Post service
//!
//! Handles reading and writing posts within threads, and the admin search
//! screen.

use forum_core::entities::NewPost;
use forum_core::traits::PostQuery;
use forum_core::{PostId, ThreadId, UserId};
use tracing::{info, instrument};

use crate::dto::{
    AdminListParams, CreatePostRequest, PageParams, PaginatedResponse, PostResponse,
    UpdatePostRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::{page_window, THREAD_PAGE_SIZE};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List posts of a thread in chronological order
    #[instrument(skip(self))]
    pub async fn list_by_thread(
        &self,
        thread_id: ThreadId,
        params: PageParams,
    ) -> ServiceResult<PaginatedResponse<PostResponse>> {
        self.ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", thread_id.to_string()))?;

        let (page, per_page) = params.resolve(THREAD_PAGE_SIZE);
        let posts = self
            .ctx
            .post_repo()
            .find_by_thread(thread_id, page_window(page, per_page))
            .await?;
        let total = self.ctx.post_repo().post_count(thread_id).await?;

        let data = posts.into_iter().map(PostResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }

    /// Get one post
    #[instrument(skip(self))]
    pub async fn get(&self, id: PostId) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", id.to_string()))?;

        Ok(PostResponse::from(post))
    }

    /// Create a post in a thread. Locked threads reject new posts.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        thread_id: ThreadId,
        author_id: Option<UserId>,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", thread_id.to_string()))?;

        if !thread.is_open() {
            return Err(ServiceError::conflict("Thread is locked"));
        }

        let post = self
            .ctx
            .post_repo()
            .create(NewPost {
                thread_id,
                author_id,
                content: request.content,
            })
            .await?;

        info!(post_id = %post.id, thread_id = %thread_id, "Post created");

        Ok(PostResponse::from(post))
    }

    /// Replace a post's content, flagging it as edited
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: PostId,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .update_content(id, &request.content)
            .await?;

        Ok(PostResponse::from(post))
    }

    /// Delete a post
    #[instrument(skip(self))]
    pub async fn delete(&self, id: PostId) -> ServiceResult<()> {
        self.ctx.post_repo().delete(id).await?;
        info!(post_id = %id, "Post deleted");
        Ok(())
    }

    /// Admin list screen with search and filters
    #[instrument(skip(self, params))]
    pub async fn admin_search(
        &self,
        params: &AdminListParams,
    ) -> ServiceResult<PaginatedResponse<PostResponse>> {
        let (page, per_page) = params.page_params().resolve(THREAD_PAGE_SIZE);
        let query = PostQuery {
            search: params.q.clone(),
            edited: params.edited,
            created_after: params.created_after,
            created_before: params.created_before,
        };

        let posts = self
            .ctx
            .post_repo()
            .search(&query, page_window(page, per_page))
            .await?;
        let total = self.ctx.post_repo().count_matching(&query).await?;

        let data = posts.into_iter().map(PostResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }
}
