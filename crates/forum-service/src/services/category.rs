//! Category service
//!
//! Handles category listings, CRUD, and the admin search screen.

use forum_core::entities::NewCategory;
use forum_core::traits::CategoryQuery;
use forum_core::CategoryId;
use tracing::{info, instrument};

use crate::dto::{
    AdminListParams, CategoryDetailResponse, CategoryResponse, CreateCategoryRequest,
    PageParams, PaginatedResponse, UpdateCategoryRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::{page_window, CATEGORY_PAGE_SIZE};

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List categories with their thread counts
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        params: PageParams,
    ) -> ServiceResult<PaginatedResponse<CategoryDetailResponse>> {
        let (page, per_page) = params.resolve(CATEGORY_PAGE_SIZE);
        let categories = self
            .ctx
            .category_repo()
            .list(page_window(page, per_page))
            .await?;
        let total = self.ctx.category_repo().count().await?;

        let mut data = Vec::with_capacity(categories.len());
        for category in categories {
            let thread_count = self.ctx.category_repo().thread_count(category.id).await?;
            data.push(CategoryDetailResponse {
                id: category.id.into_inner(),
                name: category.name,
                description: category.description,
                created_date: category.created_date,
                thread_count,
            });
        }

        Ok(PaginatedResponse::new(data, page, per_page, total))
    }

    /// Get one category with its thread count
    #[instrument(skip(self))]
    pub async fn get(&self, id: CategoryId) -> ServiceResult<CategoryDetailResponse> {
        let category = self
            .ctx
            .category_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id.to_string()))?;

        let thread_count = self.ctx.category_repo().thread_count(id).await?;

        Ok(CategoryDetailResponse {
            id: category.id.into_inner(),
            name: category.name,
            description: category.description,
            created_date: category.created_date,
            thread_count,
        })
    }

    /// Create a category
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateCategoryRequest) -> ServiceResult<CategoryResponse> {
        let category = self
            .ctx
            .category_repo()
            .create(NewCategory {
                name: request.name,
                description: request.description,
            })
            .await?;

        info!(category_id = %category.id, name = %category.name, "Category created");

        Ok(CategoryResponse::from(category))
    }

    /// Update a category's name and/or description
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: CategoryId,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let mut category = self
            .ctx
            .category_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id.to_string()))?;

        if let Some(name) = request.name {
            category.name = name;
        }
        if let Some(description) = request.description {
            category.description = description;
        }

        self.ctx.category_repo().update(&category).await?;

        Ok(CategoryResponse::from(category))
    }

    /// Delete a category, cascading to its threads and posts
    #[instrument(skip(self))]
    pub async fn delete(&self, id: CategoryId) -> ServiceResult<()> {
        self.ctx.category_repo().delete(id).await?;
        info!(category_id = %id, "Category deleted");
        Ok(())
    }

    /// Admin list screen with search
    #[instrument(skip(self, params))]
    pub async fn admin_search(
        &self,
        params: &AdminListParams,
    ) -> ServiceResult<PaginatedResponse<CategoryResponse>> {
        let (page, per_page) = params.page_params().resolve(CATEGORY_PAGE_SIZE);
        let query = CategoryQuery {
            search: params.q.clone(),
        };

        let categories = self
            .ctx
            .category_repo()
            .search(&query, page_window(page, per_page))
            .await?;
        let total = self.ctx.category_repo().count_matching(&query).await?;

        let data = categories.into_iter().map(CategoryResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }
}
