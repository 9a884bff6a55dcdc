//! Solve and fail event models
//!
//! Solves record correct submissions, fails record incorrect ones. Both are
//! insert-only; the scoreboard only ever reads them. `team_id` is a
//! denormalized copy of the submitting user's team at event time so that
//! team-mode scoring never has to chase membership history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Correct submission event
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Solve {
    pub id: i64,
    pub user_id: i64,
    pub team_id: Option<i64>,
    pub challenge_id: i64,
    pub submission: String,
    pub submitted_at: DateTime<Utc>,
}

/// Incorrect submission event (same shape as [`Solve`], separate table)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Fail {
    pub id: i64,
    pub user_id: i64,
    pub team_id: Option<i64>,
    pub challenge_id: i64,
    pub submission: String,
    pub submitted_at: DateTime<Utc>,
}

/// Outcome of a flag submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Solved,
    Failed,
}
