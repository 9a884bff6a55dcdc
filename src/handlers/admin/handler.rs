//! Admin handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    constants::{challenge_kinds, settings_keys},
    db::repositories::{ConfigRepository, EventRepository},
    error::AppResult,
    services::ChallengeService,
    state::AppState,
};

use super::{
    request::{CreateAwardRequest, CreateChallengeRequest, SetSettingsRequest},
    response::{AwardResponse, ChallengeResponse, SettingsResponse},
};

/// Current plugin settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<SettingsResponse>> {
    let address =
        ConfigRepository::get(state.db(), settings_keys::CHALLENGE_NOTIFICATION_ADDRESS).await?;

    Ok(Json(SettingsResponse {
        challenge_notification_address: address.unwrap_or_default(),
        success: false,
    }))
}

/// Update plugin settings
pub async fn set_settings(
    State(state): State<AppState>,
    Json(payload): Json<SetSettingsRequest>,
) -> AppResult<Json<SettingsResponse>> {
    let address = payload.challenge_notification_address.trim();

    if address.is_empty() {
        ConfigRepository::unset(state.db(), settings_keys::CHALLENGE_NOTIFICATION_ADDRESS).await?;
    } else {
        ConfigRepository::set(
            state.db(),
            settings_keys::CHALLENGE_NOTIFICATION_ADDRESS,
            address,
        )
        .await?;
    }

    let address =
        ConfigRepository::get(state.db(), settings_keys::CHALLENGE_NOTIFICATION_ADDRESS).await?;

    Ok(Json(SettingsResponse {
        challenge_notification_address: address.unwrap_or_default(),
        success: true,
    }))
}

/// Create a challenge with its flag
pub async fn create_challenge(
    State(state): State<AppState>,
    Json(payload): Json<CreateChallengeRequest>,
) -> AppResult<(StatusCode, Json<ChallengeResponse>)> {
    payload.validate()?;

    let kind = payload.kind.as_deref().unwrap_or(challenge_kinds::STANDARD);

    let challenge = ChallengeService::create_challenge(
        &state,
        &payload.name,
        &payload.description,
        &payload.category,
        payload.value,
        payload.hidden,
        kind,
        &payload.flag,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ChallengeResponse {
            id: challenge.id,
            name: challenge.name,
            category: challenge.category,
            value: challenge.value,
            hidden: challenge.hidden,
            kind: challenge.kind,
            created_at: challenge.created_at,
        }),
    ))
}

/// Grant a manual score adjustment
pub async fn create_award(
    State(state): State<AppState>,
    Json(payload): Json<CreateAwardRequest>,
) -> AppResult<(StatusCode, Json<AwardResponse>)> {
    payload.validate()?;

    let award = EventRepository::create_award(
        state.db(),
        payload.user_id,
        payload.team_id,
        &payload.name,
        payload.category.as_deref(),
        payload.value,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(AwardResponse {
            id: award.id,
            user_id: award.user_id,
            team_id: award.team_id,
            name: award.name,
            category: award.category,
            value: award.value,
            awarded_at: award.awarded_at,
        }),
    ))
}
