//! Profile service
//!
//! Handles user profile pages with fresh participation counts, profile
//! upserts, and the admin search screen.

use forum_core::entities::NewUserProfile;
use forum_core::traits::ProfileQuery;
use forum_core::UserId;
use tracing::{info, instrument};

use crate::dto::{
    AdminListParams, PaginatedResponse, ProfileDetailResponse, ProfileResponse,
    UpsertProfileRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::{page_window, THREAD_PAGE_SIZE};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user's profile page with thread and post counts
    #[instrument(skip(self))]
    pub async fn get_detail(&self, user_id: UserId) -> ServiceResult<ProfileDetailResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        let thread_count = self.ctx.thread_repo().count_by_author(user_id).await?;
        let post_count = self.ctx.post_repo().count_by_author(user_id).await?;

        Ok(ProfileDetailResponse {
            user_id: profile.user_id.into_inner(),
            username: user.username,
            bio: profile.bio,
            location: profile.location,
            website: profile.website,
            avatar: profile.avatar,
            joined_date: profile.joined_date,
            thread_count,
            post_count,
        })
    }

    /// Create or update a user's profile
    #[instrument(skip(self, request))]
    pub async fn upsert(
        &self,
        user_id: UserId,
        request: UpsertProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let existing = self.ctx.profile_repo().find_by_user(user_id).await?;

        let profile = match existing {
            Some(mut profile) => {
                profile.bio = request.bio;
                profile.location = request.location;
                profile.website = request.website;
                profile.avatar = request.avatar;
                self.ctx.profile_repo().update(&profile).await?;
                profile
            }
            None => {
                let created = self
                    .ctx
                    .profile_repo()
                    .create(
                        user_id,
                        NewUserProfile {
                            bio: request.bio,
                            location: request.location,
                            website: request.website,
                            avatar: request.avatar,
                        },
                    )
                    .await?;
                info!(user_id = %user_id, "Profile created");
                created
            }
        };

        Ok(ProfileResponse::from(profile))
    }

    /// Delete a user's profile
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: UserId) -> ServiceResult<()> {
        self.ctx.profile_repo().delete(user_id).await?;
        info!(user_id = %user_id, "Profile deleted");
        Ok(())
    }

    /// Admin list screen with search
    #[instrument(skip(self, params))]
    pub async fn admin_search(
        &self,
        params: &AdminListParams,
    ) -> ServiceResult<PaginatedResponse<ProfileResponse>> {
        let (page, per_page) = params.page_params().resolve(THREAD_PAGE_SIZE);
        let query = ProfileQuery {
            search: params.q.clone(),
        };

        let profiles = self
            .ctx
            .profile_repo()
            .search(&query, page_window(page, per_page))
            .await?;
        let total = self.ctx.profile_repo().count_matching(&query).await?;

        let data = profiles.into_iter().map(ProfileResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }
}
