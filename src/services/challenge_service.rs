//! Challenge service
//!
//! Flag submission dispatches through the challenge-type registry, so the
//! notifying type can hook solves and fails without the submission path
//! knowing about mail at all.

use sqlx::PgPool;

use crate::{
    constants::MAX_SUBMISSION_LENGTH,
    db::repositories::{ChallengeRepository, ConfigRepository, EventRepository},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{Challenge, SubmissionOutcome},
    services::AccountService,
    state::AppState,
};

/// Challenge submission and administration service
pub struct ChallengeService;

impl ChallengeService {
    /// Handle a flag submission for a challenge
    pub async fn attempt(
        state: &AppState,
        auth: &AuthenticatedUser,
        challenge_id: i64,
        submission: &str,
    ) -> AppResult<SubmissionOutcome> {
        let submission = submission.trim();
        if submission.is_empty() {
            return Err(AppError::Validation("Submission must not be empty".to_string()));
        }
        if submission.len() as u64 > MAX_SUBMISSION_LENGTH {
            return Err(AppError::Validation("Submission is too long".to_string()));
        }

        let pool = state.db();
        let settings = ConfigRepository::load_settings(pool).await?;
        let user = AccountService::current_user(pool, auth).await?;

        let challenge = ChallengeRepository::find_by_id(pool, challenge_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Challenge not found".to_string()))?;

        // Hidden challenges don't exist for non-admins
        if challenge.hidden && !user.is_admin() {
            return Err(AppError::NotFound("Challenge not found".to_string()));
        }

        let account_id = if settings.mode.is_teams() {
            user.team_id.ok_or_else(|| {
                AppError::Forbidden("You are not a member of a team".to_string())
            })?
        } else {
            user.id
        };

        if EventRepository::has_solved(pool, settings.mode, account_id, challenge.id).await? {
            return Err(AppError::AlreadyExists(
                "You already solved this challenge".to_string(),
            ));
        }

        let handler = state.challenge_types().get(&challenge.kind).ok_or_else(|| {
            AppError::Configuration(format!("Unknown challenge kind: {}", challenge.kind))
        })?;

        if Self::is_correct(pool, &challenge, submission).await? {
            handler
                .solve(state, &settings, &user, &challenge, submission)
                .await?;
            Ok(SubmissionOutcome::Solved)
        } else {
            handler
                .fail(state, &settings, &user, &challenge, submission)
                .await?;
            Ok(SubmissionOutcome::Failed)
        }
    }

    /// Exact-match the submission against the challenge's flags
    async fn is_correct(pool: &PgPool, challenge: &Challenge, submission: &str) -> AppResult<bool> {
        let flags = ChallengeRepository::flags(pool, challenge.id).await?;
        Ok(flags.iter().any(|flag| flag.content == submission))
    }

    /// Create a challenge with its flag (admin)
    #[allow(clippy::too_many_arguments)]
    pub async fn create_challenge(
        state: &AppState,
        name: &str,
        description: &str,
        category: &str,
        value: i32,
        hidden: bool,
        kind: &str,
        flag: &str,
    ) -> AppResult<Challenge> {
        if !state.challenge_types().contains(kind) {
            return Err(AppError::Validation(format!(
                "Unknown challenge kind: {kind}"
            )));
        }

        ChallengeRepository::create(
            state.db(),
            name,
            description,
            category,
            value,
            hidden,
            kind,
            flag,
        )
        .await
    }
}
