//! Visibility preference service
//!
//! Scoreboard display is opt-in. Absence of a preference row reads as not
//! visible; writes are idempotent upserts. In team mode only the team
//! captain may change the team's setting.

use sqlx::PgPool;

use crate::{
    db::repositories::{TeamRepository, VisibilityRepository},
    error::{AppError, AppResult},
    models::{AccountRef, SiteSettings, Team, User},
};

/// Scoreboard visibility service
pub struct VisibilityService;

impl VisibilityService {
    /// Resolve the account a user's preference operations apply to
    ///
    /// Team mode without a team is a 403: there is no account to operate on.
    pub fn resolve_account(settings: &SiteSettings, user: &User) -> AppResult<AccountRef> {
        if settings.mode.is_teams() {
            let team_id = user
                .team_id
                .ok_or_else(|| AppError::Forbidden("You are not a member of a team".to_string()))?;
            Ok(AccountRef::Team(team_id))
        } else {
            Ok(AccountRef::User(user.id))
        }
    }

    /// Stored visibility flag; false when no preference was ever recorded
    pub async fn get_visibility(pool: &PgPool, account: AccountRef) -> AppResult<bool> {
        Ok(VisibilityRepository::get(pool, account).await?.unwrap_or(false))
    }

    /// Set the visibility flag for the user's account
    ///
    /// Team mode enforces the captain-only policy before any write; rejected
    /// callers cause no mutation. Admins get no bypass here: overriding a
    /// team's own preference stays with the captain.
    pub async fn set_visibility(
        pool: &PgPool,
        settings: &SiteSettings,
        user: &User,
        visible: bool,
    ) -> AppResult<bool> {
        let account = Self::resolve_account(settings, user)?;

        if let AccountRef::Team(team_id) = account {
            let team = TeamRepository::find_by_id(pool, team_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

            Self::check_captain(&team, user)?;
        }

        let row = VisibilityRepository::upsert(pool, account, visible).await?;
        Ok(row.visible)
    }

    /// Captain-only policy check for team-mode preference writes
    fn check_captain(team: &Team, user: &User) -> AppResult<()> {
        if team.is_captain(user.id) {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Only the team captain can change this setting".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn team(captain_id: Option<i64>) -> Team {
        Team {
            id: 1,
            name: "red".to_string(),
            captain_id,
            banned: false,
            hidden: false,
            created_at: Utc::now(),
        }
    }

    fn user(id: i64) -> User {
        User {
            id,
            name: format!("user{id}"),
            email: format!("user{id}@example.com"),
            role: "user".to_string(),
            banned: false,
            hidden: false,
            team_id: Some(1),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_captain_may_change_setting() {
        assert!(VisibilityService::check_captain(&team(Some(7)), &user(7)).is_ok());
    }

    #[test]
    fn test_non_captain_is_rejected() {
        let err = VisibilityService::check_captain(&team(Some(7)), &user(8)).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_captainless_team_rejects_everyone() {
        let err = VisibilityService::check_captain(&team(None), &user(7)).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
