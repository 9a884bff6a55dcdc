//! Scoreboard service
//!
//! Computes ranked standings from solve and award events. The SQL side
//! produces per-account partial aggregates per event table
//! ([`crate::db::repositories::EventRepository`]); this module merges the
//! partials, applies the account filter (banned/hidden/opted-out accounts
//! never appear) and orders the result.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    db::repositories::{ChallengeRepository, EventRepository, VisibilityRepository},
    error::AppResult,
    models::{ScorePartial, SiteSettings, StandingsEntry, VisibleAccount},
};

/// Scoreboard ranking service
pub struct ScoreboardService;

impl ScoreboardService {
    /// Ranked standings, best score first
    ///
    /// `category` restricts both solve and award contributions to that
    /// category; `count` truncates the result to the leading rows.
    pub async fn standings(
        pool: &PgPool,
        settings: &SiteSettings,
        category: Option<&str>,
        count: Option<usize>,
    ) -> AppResult<Vec<StandingsEntry>> {
        let solves =
            EventRepository::solve_partials(pool, settings.mode, category, settings.freeze).await?;
        let awards =
            EventRepository::award_partials(pool, settings.mode, category, settings.freeze).await?;
        let accounts = VisibilityRepository::visible_accounts(pool, settings.mode).await?;

        Ok(rank_standings(solves, awards, &accounts, count))
    }

    /// Standings per challenge category
    ///
    /// One entry per distinct category; the mapping carries no ordering
    /// between categories.
    pub async fn standings_per_category(
        pool: &PgPool,
        settings: &SiteSettings,
        count: Option<usize>,
    ) -> AppResult<HashMap<String, Vec<StandingsEntry>>> {
        let categories = ChallengeRepository::distinct_categories(pool).await?;

        let mut per_category = HashMap::with_capacity(categories.len());
        for category in categories {
            let entries = Self::standings(pool, settings, Some(&category), count).await?;
            per_category.insert(category, entries);
        }

        Ok(per_category)
    }
}

/// Running total for one account while merging partials
struct MergedScore {
    score: i64,
    max_event_id: i64,
    max_time: DateTime<Utc>,
}

/// Merge solve and award partials and produce the ordered scoreboard
///
/// Scores are summed per account; ties are broken by the smallest maximum
/// contributing event id, so the account that reached the score first wins.
/// Accounts absent from `accounts` (banned, hidden, or not opted in) are
/// dropped.
fn rank_standings(
    solves: Vec<ScorePartial>,
    awards: Vec<ScorePartial>,
    accounts: &[VisibleAccount],
    count: Option<usize>,
) -> Vec<StandingsEntry> {
    let mut merged: HashMap<i64, MergedScore> = HashMap::new();

    for partial in solves.into_iter().chain(awards) {
        merged
            .entry(partial.account_id)
            .and_modify(|m| {
                m.score += partial.score;
                m.max_event_id = m.max_event_id.max(partial.max_event_id);
                m.max_time = m.max_time.max(partial.max_time);
            })
            .or_insert(MergedScore {
                score: partial.score,
                max_event_id: partial.max_event_id,
                max_time: partial.max_time,
            });
    }

    let mut rows: Vec<(i64, &str, i64, i64)> = accounts
        .iter()
        .filter_map(|account| {
            let m = merged.get(&account.id)?;
            Some((account.id, account.name.as_str(), m.score, m.max_event_id))
        })
        .collect();

    rows.sort_by(|a, b| b.2.cmp(&a.2).then(a.3.cmp(&b.3)));

    if let Some(count) = count {
        rows.truncate(count);
    }

    rows.into_iter()
        .map(|(account_id, name, score, _)| StandingsEntry {
            account_id,
            name: name.to_string(),
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    fn partial(account_id: i64, score: i64, max_event_id: i64) -> ScorePartial {
        ScorePartial {
            account_id,
            score,
            max_event_id,
            max_time: at(1_000 + max_event_id),
        }
    }

    fn account(id: i64, name: &str) -> VisibleAccount {
        VisibleAccount {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_solves_and_awards_are_summed_per_account() {
        // one solve worth 100 and one award worth 50, both for account 1
        let standings = rank_standings(
            vec![partial(1, 100, 10)],
            vec![partial(1, 50, 3)],
            &[account(1, "alice")],
            None,
        );

        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].account_id, 1);
        assert_eq!(standings[0].score, 150);
    }

    #[test]
    fn test_ordered_by_score_descending() {
        let standings = rank_standings(
            vec![partial(1, 100, 1), partial(2, 300, 2), partial(3, 200, 3)],
            vec![],
            &[account(1, "a"), account(2, "b"), account(3, "c")],
            None,
        );

        let scores: Vec<i64> = standings.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![300, 200, 100]);
    }

    #[test]
    fn test_equal_scores_break_ties_on_lower_max_event_id() {
        // account 2 reached the same score with an earlier last event
        let standings = rank_standings(
            vec![partial(1, 200, 40), partial(2, 200, 15)],
            vec![],
            &[account(1, "late"), account(2, "early")],
            None,
        );

        assert_eq!(standings[0].name, "early");
        assert_eq!(standings[1].name, "late");
    }

    #[test]
    fn test_tie_break_considers_award_events_too() {
        // both end at 200; account 1's newest event is an award with a high id
        let standings = rank_standings(
            vec![partial(1, 150, 5), partial(2, 200, 20)],
            vec![partial(1, 50, 30)],
            &[account(1, "a"), account(2, "b")],
            None,
        );

        assert_eq!(standings[0].name, "b");
    }

    #[test]
    fn test_accounts_not_in_visible_set_are_dropped() {
        // account 2 scored highest but is banned/hidden/opted out
        let standings = rank_standings(
            vec![partial(1, 100, 1), partial(2, 900, 2)],
            vec![],
            &[account(1, "alice")],
            None,
        );

        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].name, "alice");
    }

    #[test]
    fn test_accounts_without_events_are_absent() {
        let standings = rank_standings(vec![], vec![], &[account(1, "idle")], None);
        assert!(standings.is_empty());
    }

    #[test]
    fn test_count_truncates_leading_rows() {
        let standings = rank_standings(
            vec![partial(1, 10, 1), partial(2, 30, 2), partial(3, 20, 3)],
            vec![],
            &[account(1, "a"), account(2, "b"), account(3, "c")],
            Some(2),
        );

        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].score, 30);
        assert_eq!(standings[1].score, 20);
    }

    #[test]
    fn test_award_only_accounts_appear() {
        let standings = rank_standings(
            vec![],
            vec![partial(7, 50, 2)],
            &[account(7, "granted")],
            None,
        );

        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].score, 50);
    }
}
