//! Scoreboard visibility preference model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-account scoreboard opt-in
///
/// Exactly one of `user_id`/`team_id` is set, depending on the account mode
/// the row was written under. At most one row exists per account; absence of
/// a row reads as not visible.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ScoreVisibility {
    pub id: i64,
    pub user_id: Option<i64>,
    pub team_id: Option<i64>,
    pub visible: bool,
}
