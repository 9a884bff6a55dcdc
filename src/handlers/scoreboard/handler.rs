//! Scoreboard handler implementations

use axum::{Json, extract::State};
use chrono::Utc;

use crate::{
    db::repositories::ConfigRepository,
    error::AppResult,
    services::ScoreboardService,
    state::AppState,
};

use super::response::{ScoreboardResponse, to_rows};

/// Render the scoreboard: overall standings plus standings per category
pub async fn scoreboard_listing(
    State(state): State<AppState>,
) -> AppResult<Json<ScoreboardResponse>> {
    let pool = state.db();
    let settings = ConfigRepository::load_settings(pool).await?;

    let standings = ScoreboardService::standings(pool, &settings, None, None).await?;
    let per_category = ScoreboardService::standings_per_category(pool, &settings, None).await?;

    Ok(Json(ScoreboardResponse {
        standings: to_rows(standings),
        standings_per_category: per_category
            .into_iter()
            .map(|(category, entries)| (category, to_rows(entries)))
            .collect(),
        frozen: settings.is_frozen(Utc::now()),
    }))
}
