//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Plugin settings state
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    /// Empty string when no address is configured
    pub challenge_notification_address: String,
    pub success: bool,
}

/// Created challenge response
#[derive(Debug, Serialize)]
pub struct ChallengeResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub value: i32,
    pub hidden: bool,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

/// Created award response
#[derive(Debug, Serialize)]
pub struct AwardResponse {
    pub id: i64,
    pub user_id: i64,
    pub team_id: Option<i64>,
    pub name: String,
    pub category: Option<String>,
    pub value: i32,
    pub awarded_at: DateTime<Utc>,
}
