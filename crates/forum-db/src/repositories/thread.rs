//! PostgreSQL implementation of ThreadRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{NewThread, Thread};
use forum_core::error::DomainError;
use forum_core::traits::{Page, RepoResult, ThreadQuery, ThreadRepository, ThreadSort};
use forum_core::value_objects::{CategoryId, ThreadId, UserId};

use crate::models::ThreadModel;

use super::error::{map_db_error, map_fk_violation, thread_not_found};

const THREAD_COLUMNS: &str =
    "id, title, category_id, author_id, created_date, updated_date, is_pinned, is_locked, views";

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn order_clause(sort: ThreadSort) -> &'static str {
    match sort {
        ThreadSort::PinnedUpdated => "is_pinned DESC, updated_date DESC",
        ThreadSort::PinnedCreated => "is_pinned DESC, created_date DESC",
    }
}

fn search_pattern(query: &ThreadQuery) -> Option<String> {
    query.search.as_ref().map(|s| format!("%{s}%"))
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ThreadId) -> RepoResult<Option<Thread>> {
        let result = sqlx::query_as::<_, ThreadModel>(&format!(
            "SELECT {THREAD_COLUMNS} FROM threads WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Thread::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: Page) -> RepoResult<Vec<Thread>> {
        let results = sqlx::query_as::<_, ThreadModel>(&format!(
            r"
            SELECT {THREAD_COLUMNS}
            FROM threads
            ORDER BY is_pinned DESC, updated_date DESC
            LIMIT $1 OFFSET $2
            "
        ))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Thread::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM threads")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_by_category(
        &self,
        category_id: CategoryId,
        page: Page,
    ) -> RepoResult<Vec<Thread>> {
        let results = sqlx::query_as::<_, ThreadModel>(&format!(
            r"
            SELECT {THREAD_COLUMNS}
            FROM threads
            WHERE category_id = $1
            ORDER BY is_pinned DESC, updated_date DESC
            LIMIT $2 OFFSET $3
            "
        ))
        .bind(category_id.into_inner())
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Thread::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, author_id: UserId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM threads WHERE author_id = $1")
            .bind(author_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> RepoResult<Vec<Thread>> {
        let results = sqlx::query_as::<_, ThreadModel>(&format!(
            r"
            SELECT {THREAD_COLUMNS}
            FROM threads
            ORDER BY created_date DESC, id DESC
            LIMIT $1
            "
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Thread::from).collect())
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: ThreadId) -> RepoResult<()> {
        // Single in-place add, so concurrent viewers never lose an increment.
        // Deliberately leaves updated_date alone.
        let result = sqlx::query("UPDATE threads SET views = views + 1 WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, new), fields(category_id = %new.category_id))]
    async fn create(&self, new: NewThread) -> RepoResult<Thread> {
        let result = sqlx::query_as::<_, ThreadModel>(&format!(
            r"
            INSERT INTO threads (title, category_id, author_id)
            VALUES ($1, $2, $3)
            RETURNING {THREAD_COLUMNS}
            "
        ))
        .bind(&new.title)
        .bind(new.category_id.into_inner())
        .bind(new.author_id.map(UserId::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, || {
                DomainError::ReferentialIntegrity(format!(
                    "category {} does not exist",
                    new.category_id
                ))
            })
        })?;

        Ok(Thread::from(result))
    }

    #[instrument(skip(self, thread), fields(id = %thread.id))]
    async fn update(&self, thread: &Thread) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE threads
            SET title = $2, is_pinned = $3, is_locked = $4, updated_date = NOW()
            WHERE id = $1
            ",
        )
        .bind(thread.id.into_inner())
        .bind(&thread.title)
        .bind(thread.is_pinned)
        .bind(thread.is_locked)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(thread.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ThreadId) -> RepoResult<()> {
        // Posts go with the thread (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM threads WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, query))]
    async fn search(&self, query: &ThreadQuery, page: Page) -> RepoResult<Vec<Thread>> {
        let order = order_clause(query.sort);
        let results = sqlx::query_as::<_, ThreadModel>(&format!(
            r"
            SELECT {THREAD_COLUMNS}
            FROM threads
            WHERE ($1::text IS NULL OR title ILIKE $1)
              AND ($2::bigint IS NULL OR category_id = $2)
              AND ($3::boolean IS NULL OR is_pinned = $3)
              AND ($4::boolean IS NULL OR is_locked = $4)
              AND ($5::timestamptz IS NULL OR created_date >= $5)
              AND ($6::timestamptz IS NULL OR created_date < $6)
            ORDER BY {order}
            LIMIT $7 OFFSET $8
            "
        ))
        .bind(search_pattern(query))
        .bind(query.category_id.map(CategoryId::into_inner))
        .bind(query.pinned)
        .bind(query.locked)
        .bind(query.created_after)
        .bind(query.created_before)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Thread::from).collect())
    }

    #[instrument(skip(self, query))]
    async fn count_matching(&self, query: &ThreadQuery) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM threads
            WHERE ($1::text IS NULL OR title ILIKE $1)
              AND ($2::bigint IS NULL OR category_id = $2)
              AND ($3::boolean IS NULL OR is_pinned = $3)
              AND ($4::boolean IS NULL OR is_locked = $4)
              AND ($5::timestamptz IS NULL OR created_date >= $5)
              AND ($6::timestamptz IS NULL OR created_date < $6)
            ",
        )
        .bind(search_pattern(query))
        .bind(query.category_id.map(CategoryId::into_inner))
        .bind(query.pinned)
        .bind(query.locked)
        .bind(query.created_after)
        .bind(query.created_before)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
