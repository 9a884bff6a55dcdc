//! Preference request DTOs

use serde::Deserialize;

/// Set visibility preference request
#[derive(Debug, Deserialize)]
pub struct SetPreferencesRequest {
    /// Whether the account wants to appear on the public scoreboard
    pub visible: bool,
}
