//! Scoreboard response DTOs

use std::collections::HashMap;

use serde::Serialize;

use crate::models::StandingsEntry;

/// One scoreboard row
///
/// Deliberately carries no profile link or account URL; scoreboard entries
/// are plain name/score rows.
#[derive(Debug, Serialize)]
pub struct StandingsRow {
    pub position: usize,
    pub account_id: i64,
    pub name: String,
    pub score: i64,
}

/// Scoreboard listing response
#[derive(Debug, Serialize)]
pub struct ScoreboardResponse {
    pub standings: Vec<StandingsRow>,
    pub standings_per_category: HashMap<String, Vec<StandingsRow>>,
    pub frozen: bool,
}

/// Number standings entries from first place down
pub fn to_rows(entries: Vec<StandingsEntry>) -> Vec<StandingsRow> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| StandingsRow {
            position: i + 1,
            account_id: entry.account_id,
            name: entry.name,
            score: entry.score,
        })
        .collect()
}
