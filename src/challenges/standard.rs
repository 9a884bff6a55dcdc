//! Standard challenge type

use async_trait::async_trait;

use crate::{
    constants::challenge_kinds,
    db::repositories::EventRepository,
    error::AppResult,
    models::{Challenge, Fail, SiteSettings, Solve, User},
    state::AppState,
};

use super::ChallengeType;

/// Default challenge type: records the event, nothing else
pub struct StandardChallenge;

#[async_trait]
impl ChallengeType for StandardChallenge {
    fn id(&self) -> &'static str {
        challenge_kinds::STANDARD
    }

    async fn solve(
        &self,
        state: &AppState,
        _settings: &SiteSettings,
        user: &User,
        challenge: &Challenge,
        submission: &str,
    ) -> AppResult<Solve> {
        EventRepository::record_solve(state.db(), user.id, user.team_id, challenge.id, submission)
            .await
    }

    async fn fail(
        &self,
        state: &AppState,
        _settings: &SiteSettings,
        user: &User,
        challenge: &Challenge,
        submission: &str,
    ) -> AppResult<Fail> {
        EventRepository::record_fail(state.db(), user.id, user.team_id, challenge.id, submission)
            .await
    }
}
