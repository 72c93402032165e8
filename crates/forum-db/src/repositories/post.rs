//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{NewPost, Post};
use forum_core::error::DomainError;
use forum_core::traits::{Page, PostQuery, PostRepository, RepoResult};
use forum_core::value_objects::{PostId, ThreadId, UserId};

use crate::models::PostModel;

use super::error::{map_db_error, map_fk_violation, post_not_found};

const POST_COLUMNS: &str =
    "id, thread_id, author_id, content, created_date, updated_date, is_edited";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn search_pattern(query: &PostQuery) -> Option<String> {
    query.search.as_ref().map(|s| format!("%{s}%"))
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_by_thread(&self, thread_id: ThreadId, page: Page) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(&format!(
            r"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE thread_id = $1
            ORDER BY created_date ASC, id ASC
            LIMIT $2 OFFSET $3
            "
        ))
        .bind(thread_id.into_inner())
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn post_count(&self, thread_id: ThreadId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE thread_id = $1")
            .bind(thread_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn last_post(&self, thread_id: ThreadId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            r"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE thread_id = $1
            ORDER BY created_date DESC, id DESC
            LIMIT 1
            "
        ))
        .bind(thread_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, author_id: UserId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE author_id = $1")
            .bind(author_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, new), fields(thread_id = %new.thread_id))]
    async fn create(&self, new: NewPost) -> RepoResult<Post> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            r"
            INSERT INTO posts (thread_id, author_id, content)
            VALUES ($1, $2, $3)
            RETURNING {POST_COLUMNS}
            "
        ))
        .bind(new.thread_id.into_inner())
        .bind(new.author_id.map(UserId::into_inner))
        .bind(&new.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, || {
                DomainError::ReferentialIntegrity(format!(
                    "thread {} does not exist",
                    new.thread_id
                ))
            })
        })?;

        Ok(Post::from(result))
    }

    #[instrument(skip(self, content))]
    async fn update_content(&self, id: PostId, content: &str) -> RepoResult<Post> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            r"
            UPDATE posts
            SET content = $2, updated_date = NOW(), is_edited = TRUE
            WHERE id = $1
            RETURNING {POST_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(content)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Post::from).ok_or_else(|| post_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, query))]
    async fn search(&self, query: &PostQuery, page: Page) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT p.id, p.thread_id, p.author_id, p.content,
                   p.created_date, p.updated_date, p.is_edited
            FROM posts p
            LEFT JOIN users u ON u.id = p.author_id
            WHERE ($1::text IS NULL OR p.content ILIKE $1 OR u.username ILIKE $1)
              AND ($2::boolean IS NULL OR p.is_edited = $2)
              AND ($3::timestamptz IS NULL OR p.created_date >= $3)
              AND ($4::timestamptz IS NULL OR p.created_date < $4)
            ORDER BY p.created_date DESC, p.id DESC
            LIMIT $5 OFFSET $6
            ",
        )
        .bind(search_pattern(query))
        .bind(query.edited)
        .bind(query.created_after)
        .bind(query.created_before)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self, query))]
    async fn count_matching(&self, query: &PostQuery) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM posts p
            LEFT JOIN users u ON u.id = p.author_id
            WHERE ($1::text IS NULL OR p.content ILIKE $1 OR u.username ILIKE $1)
              AND ($2::boolean IS NULL OR p.is_edited = $2)
              AND ($3::timestamptz IS NULL OR p.created_date >= $3)
              AND ($4::timestamptz IS NULL OR p.created_date < $4)
            ",
        )
        .bind(search_pattern(query))
        .bind(query.edited)
        .bind(query.created_after)
        .bind(query.created_before)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
