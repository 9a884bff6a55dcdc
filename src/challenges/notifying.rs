//! Notifying challenge type
//!
//! Same recording behavior as the standard type, but every solve and fail
//! additionally sends an email notification to the configured address. The
//! notification runs after the event row is committed and never fails the
//! submission.

use async_trait::async_trait;

use crate::{
    constants::challenge_kinds,
    db::repositories::EventRepository,
    error::AppResult,
    models::{Challenge, Fail, SiteSettings, Solve, SubmissionOutcome, User},
    services::NotificationService,
    state::AppState,
};

use super::ChallengeType;

/// Challenge type that emails a notification for every solve attempt
pub struct NotifyingChallenge;

#[async_trait]
impl ChallengeType for NotifyingChallenge {
    fn id(&self) -> &'static str {
        challenge_kinds::NOTIFYING
    }

    async fn solve(
        &self,
        state: &AppState,
        settings: &SiteSettings,
        user: &User,
        challenge: &Challenge,
        submission: &str,
    ) -> AppResult<Solve> {
        let solve = EventRepository::record_solve(
            state.db(),
            user.id,
            user.team_id,
            challenge.id,
            submission,
        )
        .await?;

        NotificationService::notify_submission(
            state,
            settings,
            SubmissionOutcome::Solved,
            user,
            challenge,
            submission,
        )
        .await;

        Ok(solve)
    }

    async fn fail(
        &self,
        state: &AppState,
        settings: &SiteSettings,
        user: &User,
        challenge: &Challenge,
        submission: &str,
    ) -> AppResult<Fail> {
        let fail = EventRepository::record_fail(
            state.db(),
            user.id,
            user.team_id,
            challenge.id,
            submission,
        )
        .await?;

        NotificationService::notify_submission(
            state,
            settings,
            SubmissionOutcome::Failed,
            user,
            challenge,
            submission,
        )
        .await;

        Ok(fail)
    }
}
