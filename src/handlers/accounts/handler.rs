//! Account handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::AccountService,
    state::AppState,
};

use super::{
    request::ListQuery,
    response::{TeamProfileResponse, TeamsListResponse, UserProfileResponse, UsersListResponse},
};

/// List all users (admin only; 404 otherwise)
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<UsersListResponse>> {
    let (offset, limit) = query.pagination();
    let (users, total) = AccountService::list_users(state.db(), &auth_user, offset, limit).await?;

    Ok(Json(UsersListResponse {
        users: users.into_iter().map(UserProfileResponse::from).collect(),
        total,
    }))
}

/// Public user page (admin or owner; 404 otherwise)
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<UserProfileResponse>> {
    let user = AccountService::get_user_profile(state.db(), &auth_user, id).await?;
    Ok(Json(user.into()))
}

/// List all teams (admin only; 404 otherwise)
pub async fn list_teams(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<TeamsListResponse>> {
    let (offset, limit) = query.pagination();
    let (teams, total) = AccountService::list_teams(state.db(), &auth_user, offset, limit).await?;

    Ok(Json(TeamsListResponse {
        teams: teams.into_iter().map(TeamProfileResponse::from).collect(),
        total,
    }))
}

/// Public team page (admin or member; 404 otherwise)
pub async fn get_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<TeamProfileResponse>> {
    let team = AccountService::get_team_profile(state.db(), &auth_user, id).await?;
    Ok(Json(team.into()))
}
