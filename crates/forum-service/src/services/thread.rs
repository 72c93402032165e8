//! Thread service
//!
//! Handles thread listings, the view-counting detail screen, CRUD, and the
//! admin search screen.

use forum_core::entities::NewThread;
use forum_core::traits::{ThreadQuery, ThreadSort};
use forum_core::{CategoryId, ThreadId, UserId};
use tracing::{info, instrument};

use crate::dto::{
    AdminListParams, CreateThreadRequest, PageParams, PaginatedResponse, PostResponse,
    ThreadDetailResponse, ThreadResponse, UpdateThreadRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::{page_window, THREAD_PAGE_SIZE};

/// Thread service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all threads, pinned first then most recently updated
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        params: PageParams,
    ) -> ServiceResult<PaginatedResponse<ThreadResponse>> {
        let (page, per_page) = params.resolve(THREAD_PAGE_SIZE);
        let threads = self
            .ctx
            .thread_repo()
            .list(page_window(page, per_page))
            .await?;
        let total = self.ctx.thread_repo().count().await?;

        let data = threads.into_iter().map(ThreadResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }

    /// List threads of a category, pinned first then most recently updated
    #[instrument(skip(self))]
    pub async fn list_by_category(
        &self,
        category_id: CategoryId,
        params: PageParams,
    ) -> ServiceResult<PaginatedResponse<ThreadResponse>> {
        // 404 for an unknown category rather than an empty listing
        self.ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;

        let (page, per_page) = params.resolve(THREAD_PAGE_SIZE);
        let threads = self
            .ctx
            .thread_repo()
            .find_by_category(category_id, page_window(page, per_page))
            .await?;
        let total = self.ctx.category_repo().thread_count(category_id).await?;

        let data = threads.into_iter().map(ThreadResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }

    /// View a thread: count the visit, then return the thread with its
    /// aggregates. The returned view count includes this visit.
    #[instrument(skip(self))]
    pub async fn view(&self, id: ThreadId) -> ServiceResult<ThreadDetailResponse> {
        self.ctx.thread_repo().increment_views(id).await?;
        self.detail(id).await
    }

    /// Get a thread with its aggregates, without counting a visit
    #[instrument(skip(self))]
    pub async fn detail(&self, id: ThreadId) -> ServiceResult<ThreadDetailResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", id.to_string()))?;

        let post_count = self.ctx.post_repo().post_count(id).await?;
        let last_post = self.ctx.post_repo().last_post(id).await?;

        Ok(ThreadDetailResponse {
            thread: ThreadResponse::from(thread),
            post_count,
            last_post: last_post.map(PostResponse::from),
        })
    }

    /// Create a thread in a category
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: Option<UserId>,
        request: CreateThreadRequest,
    ) -> ServiceResult<ThreadResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .create(NewThread {
                title: request.title,
                category_id: CategoryId::new(request.category_id),
                author_id,
            })
            .await?;

        info!(thread_id = %thread.id, category_id = %thread.category_id, "Thread created");

        Ok(ThreadResponse::from(thread))
    }

    /// Update a thread's title and moderation flags
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: ThreadId,
        request: UpdateThreadRequest,
    ) -> ServiceResult<ThreadResponse> {
        let mut thread = self
            .ctx
            .thread_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", id.to_string()))?;

        if let Some(title) = request.title {
            thread.set_title(title);
        }
        if let Some(pinned) = request.is_pinned {
            thread.set_pinned(pinned);
        }
        if let Some(locked) = request.is_locked {
            thread.set_locked(locked);
        }

        self.ctx.thread_repo().update(&thread).await?;

        // Re-read so the response carries the store's timestamps
        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", id.to_string()))?;

        Ok(ThreadResponse::from(thread))
    }

    /// Delete a thread, cascading to its posts
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ThreadId) -> ServiceResult<()> {
        self.ctx.thread_repo().delete(id).await?;
        info!(thread_id = %id, "Thread deleted");
        Ok(())
    }

    /// Admin list screen with search and filters
    #[instrument(skip(self, params))]
    pub async fn admin_search(
        &self,
        params: &AdminListParams,
    ) -> ServiceResult<PaginatedResponse<ThreadResponse>> {
        let (page, per_page) = params.page_params().resolve(THREAD_PAGE_SIZE);
        let sort = match params.sort.as_deref() {
            Some("updated") => ThreadSort::PinnedUpdated,
            _ => ThreadSort::PinnedCreated,
        };
        let query = ThreadQuery {
            search: params.q.clone(),
            category_id: params.category_id.map(CategoryId::new),
            pinned: params.pinned,
            locked: params.locked,
            created_after: params.created_after,
            created_before: params.created_before,
            sort,
        };

        let threads = self
            .ctx
            .thread_repo()
            .search(&query, page_window(page, per_page))
            .await?;
        let total = self.ctx.thread_repo().count_matching(&query).await?;

        let data = threads.into_iter().map(ThreadResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }
}
