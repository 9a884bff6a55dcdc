//! Admin request DTOs

use serde::Deserialize;
use validator::Validate;

/// Update plugin settings request
#[derive(Debug, Deserialize)]
pub struct SetSettingsRequest {
    /// Destination for solve/fail notification mail; empty clears the setting
    pub challenge_notification_address: String,
}

/// Create challenge request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChallengeRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, max = 80))]
    pub category: String,

    pub value: i32,

    #[serde(default)]
    pub hidden: bool,

    /// Challenge kind; defaults to the standard type
    pub kind: Option<String>,

    #[validate(length(min = 1))]
    pub flag: String,
}

/// Create award request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAwardRequest {
    pub user_id: i64,

    pub team_id: Option<i64>,

    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(length(max = 80))]
    pub category: Option<String>,

    pub value: i32,
}
