//! Identity extractor
//!
//! The forum never authenticates; an upstream collaborator may supply the
//! current user's id through the `x-forum-user-id` header. The header is
//! optional, and a broken reference surfaces later as a referential
//! integrity error.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use forum_core::UserId;

use crate::response::ApiError;

/// Header carrying the acting user's id
pub const USER_ID_HEADER: &str = "x-forum-user-id";

/// Current user resolved from the identity header, if any
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentUser(pub Option<UserId>);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(CurrentUser(None));
        };

        let raw = value.to_str().map_err(|_| {
            ApiError::InvalidIdentity(format!("{USER_ID_HEADER} is not valid ASCII"))
        })?;

        let user_id = raw.parse::<i64>().map_err(|_| {
            ApiError::InvalidIdentity(format!("{USER_ID_HEADER} must be an integer"))
        })?;

        Ok(CurrentUser(Some(UserId::new(user_id))))
    }
}
