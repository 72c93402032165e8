//! User service
//!
//! Minimal user reference management. The forum does not authenticate; it
//! keeps user rows so authorship and profiles have something to point at.

use forum_core::entities::NewUser;
use forum_core::UserId;
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: UserId) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// Register a user reference
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .create(NewUser {
                username: request.username,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User created");

        Ok(UserResponse::from(user))
    }

    /// Remove a user. Their threads and posts survive anonymously; their
    /// profile is removed with them.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> ServiceResult<()> {
        self.ctx.user_repo().delete(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
