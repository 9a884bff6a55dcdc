//! Standings models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-account partial aggregate over one event table (solves or awards)
///
/// `max_event_id`/`max_time` track the newest contributing event; the id is
/// what standings use to break score ties because row ids are monotonic and
/// storage-independent, unlike timestamp precision.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ScorePartial {
    pub account_id: i64,
    pub score: i64,
    pub max_event_id: i64,
    pub max_time: DateTime<Utc>,
}

/// One ranked scoreboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub account_id: i64,
    pub name: String,
    pub score: i64,
}
