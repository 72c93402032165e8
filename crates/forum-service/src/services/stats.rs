//! Stats service
//!
//! Forum-wide counts for the index page, and the database readiness probe.
//! All counts are computed at call time.

use tracing::instrument;

use crate::dto::{ForumSummaryResponse, ThreadResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Number of recent threads shown on the index summary
const RECENT_THREADS: i64 = 5;

/// Stats service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Forum-wide summary: entity counts plus the newest threads
    #[instrument(skip(self))]
    pub async fn summary(&self) -> ServiceResult<ForumSummaryResponse> {
        let category_count = self.ctx.category_repo().count().await?;
        let thread_count = self.ctx.thread_repo().count().await?;
        let post_count = self.ctx.post_repo().count().await?;
        let user_count = self.ctx.user_repo().count().await?;
        let recent = self.ctx.thread_repo().recent(RECENT_THREADS).await?;

        Ok(ForumSummaryResponse {
            category_count,
            thread_count,
            post_count,
            user_count,
            recent_threads: recent.into_iter().map(ThreadResponse::from).collect(),
        })
    }

    /// Check that the database answers a trivial query
    #[instrument(skip(self))]
    pub async fn check_database(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.ctx.pool())
            .await
            .is_ok()
    }
}
