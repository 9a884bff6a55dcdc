//! Challenge handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::{
    db::repositories::ChallengeRepository,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::SubmissionOutcome,
    services::ChallengeService,
    state::AppState,
};

use super::{
    request::AttemptRequest,
    response::{AttemptResponse, ChallengeSummary, ChallengesListResponse},
};

/// List non-hidden challenges
pub async fn list_challenges(
    State(state): State<AppState>,
) -> AppResult<Json<ChallengesListResponse>> {
    let challenges = ChallengeRepository::list(state.db(), false).await?;

    Ok(Json(ChallengesListResponse {
        challenges: challenges.into_iter().map(ChallengeSummary::from).collect(),
    }))
}

/// Submit a flag for a challenge
pub async fn attempt(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<AttemptRequest>,
) -> AppResult<Json<AttemptResponse>> {
    payload.validate()?;

    let outcome = ChallengeService::attempt(&state, &auth_user, id, &payload.submission).await?;

    let message = match outcome {
        SubmissionOutcome::Solved => "Correct".to_string(),
        SubmissionOutcome::Failed => "Incorrect".to_string(),
    };

    Ok(Json(AttemptResponse { outcome, message }))
}
