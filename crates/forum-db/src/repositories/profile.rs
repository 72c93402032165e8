//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{NewUserProfile, UserProfile};
use forum_core::error::DomainError;
use forum_core::traits::{Page, ProfileQuery, ProfileRepository, RepoResult};
use forum_core::value_objects::UserId;

use crate::models::UserProfileModel;

use super::error::{map_db_error, map_fk_violation, profile_not_found};

const PROFILE_COLUMNS: &str = "user_id, bio, location, website, avatar, joined_date";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn search_pattern(query: &ProfileQuery) -> Option<String> {
    query.search.as_ref().map(|s| format!("%{s}%"))
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<UserProfile>> {
        let result = sqlx::query_as::<_, UserProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE user_id = $1"
        ))
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserProfile::from))
    }

    #[instrument(skip(self, new))]
    async fn create(&self, user_id: UserId, new: NewUserProfile) -> RepoResult<UserProfile> {
        let result = sqlx::query_as::<_, UserProfileModel>(&format!(
            r"
            INSERT INTO user_profiles (user_id, bio, location, website, avatar)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PROFILE_COLUMNS}
            "
        ))
        .bind(user_id.into_inner())
        .bind(&new.bio)
        .bind(&new.location)
        .bind(&new.website)
        .bind(&new.avatar)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return DomainError::ReferentialIntegrity(format!(
                        "user {user_id} already has a profile"
                    ));
                }
            }
            map_fk_violation(e, || {
                DomainError::ReferentialIntegrity(format!("user {user_id} does not exist"))
            })
        })?;

        Ok(UserProfile::from(result))
    }

    #[instrument(skip(self, profile), fields(user_id = %profile.user_id))]
    async fn update(&self, profile: &UserProfile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE user_profiles
            SET bio = $2, location = $3, website = $4, avatar = $5
            WHERE user_id = $1
            ",
        )
        .bind(profile.user_id.into_inner())
        .bind(&profile.bio)
        .bind(&profile.location)
        .bind(&profile.website)
        .bind(&profile.avatar)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(profile.user_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: UserId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM user_profiles WHERE user_id = $1")
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(user_id));
        }

        Ok(())
    }

    #[instrument(skip(self, query))]
    async fn search(&self, query: &ProfileQuery, page: Page) -> RepoResult<Vec<UserProfile>> {
        let results = sqlx::query_as::<_, UserProfileModel>(
            r"
            SELECT pr.user_id, pr.bio, pr.location, pr.website, pr.avatar, pr.joined_date
            FROM user_profiles pr
            JOIN users u ON u.id = pr.user_id
            WHERE ($1::text IS NULL OR u.username ILIKE $1 OR pr.location ILIKE $1)
            ORDER BY pr.joined_date DESC, pr.user_id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(search_pattern(query))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserProfile::from).collect())
    }

    #[instrument(skip(self, query))]
    async fn count_matching(&self, query: &ProfileQuery) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM user_profiles pr
            JOIN users u ON u.id = pr.user_id
            WHERE ($1::text IS NULL OR u.username ILIKE $1 OR pr.location ILIKE $1)
            ",
        )
        .bind(search_pattern(query))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
