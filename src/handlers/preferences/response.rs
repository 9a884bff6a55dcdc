//! Preference response DTOs

use serde::Serialize;

/// Visibility preference state
#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    /// The word describing the account kind (`team` or `username`)
    pub account: &'static str,
    pub visible: bool,
    pub success: bool,
}
