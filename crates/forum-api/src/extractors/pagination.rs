//! Pagination extractor
//!
//! Extracts page-number pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use forum_service::dto::PageParams;

use crate::response::ApiError;

/// Page/per_page query parameters
///
/// Both are optional; per-route defaults apply, and per_page is clamped
/// to 1..=100 when resolved.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery(pub PageParams);

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(PageQuery(params))
    }
}
