//! Preference handler implementations

use axum::{Json, extract::State};

use crate::{
    db::repositories::ConfigRepository,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{AccountService, VisibilityService},
    state::AppState,
};

use super::{request::SetPreferencesRequest, response::PreferencesResponse};

/// Current visibility preference of the caller's account
pub async fn get_preferences(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<PreferencesResponse>> {
    let pool = state.db();
    let settings = ConfigRepository::load_settings(pool).await?;
    let user = AccountService::current_user(pool, &auth_user).await?;

    let account = VisibilityService::resolve_account(&settings, &user)?;
    let visible = VisibilityService::get_visibility(pool, account).await?;

    Ok(Json(PreferencesResponse {
        account: account.word(),
        visible,
        success: false,
    }))
}

/// Update the visibility preference of the caller's account
///
/// In team mode only the captain may do this; everyone else gets a 403 and
/// the stored preference is untouched.
pub async fn set_preferences(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SetPreferencesRequest>,
) -> AppResult<Json<PreferencesResponse>> {
    let pool = state.db();
    let settings = ConfigRepository::load_settings(pool).await?;
    let user = AccountService::current_user(pool, &auth_user).await?;

    let account = VisibilityService::resolve_account(&settings, &user)?;
    let visible =
        VisibilityService::set_visibility(pool, &settings, &user, payload.visible).await?;

    Ok(Json(PreferencesResponse {
        account: account.word(),
        visible,
        success: true,
    }))
}
