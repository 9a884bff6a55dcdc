//! Account response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Team, User};

/// User public profile response
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub id: i64,
    pub name: String,
    pub team_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            team_id: user.team_id,
            created_at: user.created_at,
        }
    }
}

/// Team public profile response
#[derive(Debug, Serialize)]
pub struct TeamProfileResponse {
    pub id: i64,
    pub name: String,
    pub captain_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<Team> for TeamProfileResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            captain_id: team.captain_id,
            created_at: team.created_at,
        }
    }
}

/// User list response
#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub users: Vec<UserProfileResponse>,
    pub total: i64,
}

/// Team list response
#[derive(Debug, Serialize)]
pub struct TeamsListResponse {
    pub teams: Vec<TeamProfileResponse>,
    pub total: i64,
}
