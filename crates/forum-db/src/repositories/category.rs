//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{Category, NewCategory};
use forum_core::traits::{CategoryQuery, CategoryRepository, Page, RepoResult};
use forum_core::value_objects::CategoryId;

use crate::models::CategoryModel;

use super::error::{category_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn search_pattern(query: &CategoryQuery) -> Option<String> {
    query.search.as_ref().map(|s| format!("%{s}%"))
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, created_date
            FROM categories
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: Page) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, created_date
            FROM categories
            ORDER BY name ASC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn thread_count(&self, id: CategoryId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM threads WHERE category_id = $1")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, new), fields(name = %new.name))]
    async fn create(&self, new: NewCategory) -> RepoResult<Category> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_date
            ",
        )
        .bind(&new.name)
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                forum_core::DomainError::DuplicateCategoryName(new.name.clone())
            })
        })?;

        Ok(Category::from(result))
    }

    #[instrument(skip(self, category), fields(id = %category.id))]
    async fn update(&self, category: &Category) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE categories
            SET name = $2, description = $3
            WHERE id = $1
            ",
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .bind(&category.description)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                forum_core::DomainError::DuplicateCategoryName(category.name.clone())
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(category.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CategoryId) -> RepoResult<()> {
        // Threads and their posts go with the category (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, query))]
    async fn search(&self, query: &CategoryQuery, page: Page) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, created_date
            FROM categories
            WHERE ($1::text IS NULL OR name ILIKE $1 OR description ILIKE $1)
            ORDER BY name ASC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(search_pattern(query))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self, query))]
    async fn count_matching(&self, query: &CategoryQuery) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM categories
            WHERE ($1::text IS NULL OR name ILIKE $1 OR description ILIKE $1)
            ",
        )
        .bind(search_pattern(query))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
