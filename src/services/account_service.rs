//! Account service
//!
//! Listing and profile access follow the site policy: listings are
//! admin-only, public profiles are admin-or-owner. Both restrictions answer
//! 404 rather than 403 so the existence of accounts leaks nothing.

use sqlx::PgPool;

use crate::{
    db::repositories::{TeamRepository, UserRepository},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{Team, User},
};

/// Account listing and profile service
pub struct AccountService;

impl AccountService {
    /// Load the user row behind an authenticated request
    pub async fn current_user(pool: &PgPool, auth: &AuthenticatedUser) -> AppResult<User> {
        UserRepository::find_by_id(pool, auth.id)
            .await?
            .ok_or(AppError::Unauthorized)
    }

    /// List users; admin only, otherwise reported as not found
    pub async fn list_users(
        pool: &PgPool,
        auth: &AuthenticatedUser,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<User>, i64)> {
        if !auth.is_admin() {
            return Err(AppError::NotFound("Not found".to_string()));
        }

        UserRepository::list(pool, offset, limit).await
    }

    /// List teams; admin only, otherwise reported as not found
    pub async fn list_teams(
        pool: &PgPool,
        auth: &AuthenticatedUser,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Team>, i64)> {
        if !auth.is_admin() {
            return Err(AppError::NotFound("Not found".to_string()));
        }

        TeamRepository::list(pool, offset, limit).await
    }

    /// Public user profile; admin or the user themselves
    pub async fn get_user_profile(
        pool: &PgPool,
        auth: &AuthenticatedUser,
        user_id: i64,
    ) -> AppResult<User> {
        if !auth.is_admin() && auth.id != user_id {
            return Err(AppError::NotFound("Not found".to_string()));
        }

        UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Public team profile; admin or a member of the team
    pub async fn get_team_profile(
        pool: &PgPool,
        auth: &AuthenticatedUser,
        team_id: i64,
    ) -> AppResult<Team> {
        if !auth.is_admin() {
            let current = Self::current_user(pool, auth).await?;
            if current.team_id != Some(team_id) {
                return Err(AppError::NotFound("Not found".to_string()));
            }
        }

        TeamRepository::find_by_id(pool, team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }
}
