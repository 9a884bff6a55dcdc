//! Solve, fail and award event repository
//!
//! Event tables are insert-only. The scoreboard reads them through the
//! per-account partial aggregates at the bottom of this file; the standings
//! ranking itself happens in [`crate::services::ScoreboardService`].

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{AccountMode, Award, Fail, ScorePartial, Solve},
};

/// Repository for solve/fail/award event operations
pub struct EventRepository;

impl EventRepository {
    /// Record a correct submission
    pub async fn record_solve(
        pool: &PgPool,
        user_id: i64,
        team_id: Option<i64>,
        challenge_id: i64,
        submission: &str,
    ) -> AppResult<Solve> {
        let solve = sqlx::query_as::<_, Solve>(
            r#"
            INSERT INTO solves (user_id, team_id, challenge_id, submission)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(team_id)
        .bind(challenge_id)
        .bind(submission)
        .fetch_one(pool)
        .await?;

        Ok(solve)
    }

    /// Record an incorrect submission
    pub async fn record_fail(
        pool: &PgPool,
        user_id: i64,
        team_id: Option<i64>,
        challenge_id: i64,
        submission: &str,
    ) -> AppResult<Fail> {
        let fail = sqlx::query_as::<_, Fail>(
            r#"
            INSERT INTO fails (user_id, team_id, challenge_id, submission)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(team_id)
        .bind(challenge_id)
        .bind(submission)
        .fetch_one(pool)
        .await?;

        Ok(fail)
    }

    /// Whether the account already solved the challenge
    pub async fn has_solved(
        pool: &PgPool,
        mode: AccountMode,
        account_id: i64,
        challenge_id: i64,
    ) -> AppResult<bool> {
        let query = match mode {
            AccountMode::Users => {
                r#"SELECT EXISTS(SELECT 1 FROM solves WHERE user_id = $1 AND challenge_id = $2)"#
            }
            AccountMode::Teams => {
                r#"SELECT EXISTS(SELECT 1 FROM solves WHERE team_id = $1 AND challenge_id = $2)"#
            }
        };

        let solved: bool = sqlx::query_scalar(query)
            .bind(account_id)
            .bind(challenge_id)
            .fetch_one(pool)
            .await?;

        Ok(solved)
    }

    /// Grant a manual score adjustment
    pub async fn create_award(
        pool: &PgPool,
        user_id: i64,
        team_id: Option<i64>,
        name: &str,
        category: Option<&str>,
        value: i32,
    ) -> AppResult<Award> {
        let award = sqlx::query_as::<_, Award>(
            r#"
            INSERT INTO awards (user_id, team_id, name, category, value)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(team_id)
        .bind(name)
        .bind(category)
        .bind(value)
        .fetch_one(pool)
        .await?;

        Ok(award)
    }

    /// Per-account solve score partials
    ///
    /// Sums challenge values over solves joined to their challenge, excluding
    /// hidden challenges, optionally restricted to one category and to events
    /// strictly before the freeze instant.
    pub async fn solve_partials(
        pool: &PgPool,
        mode: AccountMode,
        category: Option<&str>,
        freeze: Option<DateTime<Utc>>,
    ) -> AppResult<Vec<ScorePartial>> {
        let query = match mode {
            AccountMode::Users => {
                r#"
                SELECT
                    s.user_id AS account_id,
                    SUM(c.value)::BIGINT AS score,
                    MAX(s.id) AS max_event_id,
                    MAX(s.submitted_at) AS max_time
                FROM solves s
                JOIN challenges c ON c.id = s.challenge_id
                WHERE c.hidden = FALSE
                    AND ($1::text IS NULL OR c.category = $1)
                    AND ($2::timestamptz IS NULL OR s.submitted_at < $2)
                GROUP BY s.user_id
                "#
            }
            AccountMode::Teams => {
                r#"
                SELECT
                    s.team_id AS account_id,
                    SUM(c.value)::BIGINT AS score,
                    MAX(s.id) AS max_event_id,
                    MAX(s.submitted_at) AS max_time
                FROM solves s
                JOIN challenges c ON c.id = s.challenge_id
                WHERE s.team_id IS NOT NULL
                    AND c.hidden = FALSE
                    AND ($1::text IS NULL OR c.category = $1)
                    AND ($2::timestamptz IS NULL OR s.submitted_at < $2)
                GROUP BY s.team_id
                "#
            }
        };

        let partials = sqlx::query_as::<_, ScorePartial>(query)
            .bind(category)
            .bind(freeze)
            .fetch_all(pool)
            .await?;

        Ok(partials)
    }

    /// Per-account award score partials, same filters as [`Self::solve_partials`]
    pub async fn award_partials(
        pool: &PgPool,
        mode: AccountMode,
        category: Option<&str>,
        freeze: Option<DateTime<Utc>>,
    ) -> AppResult<Vec<ScorePartial>> {
        let query = match mode {
            AccountMode::Users => {
                r#"
                SELECT
                    a.user_id AS account_id,
                    SUM(a.value)::BIGINT AS score,
                    MAX(a.id) AS max_event_id,
                    MAX(a.awarded_at) AS max_time
                FROM awards a
                WHERE ($1::text IS NULL OR a.category = $1)
                    AND ($2::timestamptz IS NULL OR a.awarded_at < $2)
                GROUP BY a.user_id
                "#
            }
            AccountMode::Teams => {
                r#"
                SELECT
                    a.team_id AS account_id,
                    SUM(a.value)::BIGINT AS score,
                    MAX(a.id) AS max_event_id,
                    MAX(a.awarded_at) AS max_time
                FROM awards a
                WHERE a.team_id IS NOT NULL
                    AND ($1::text IS NULL OR a.category = $1)
                    AND ($2::timestamptz IS NULL OR a.awarded_at < $2)
                GROUP BY a.team_id
                "#
            }
        };

        let partials = sqlx::query_as::<_, ScorePartial>(query)
            .bind(category)
            .bind(freeze)
            .fetch_all(pool)
            .await?;

        Ok(partials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    use crate::test_utils::db as test_db;

    #[tokio::test]
    async fn test_solves_at_or_after_freeze_do_not_score() {
        let pool = test_db::test_pool().await;
        let user_id = test_db::insert_user(&pool, "freeze_user").await;
        let challenge_id =
            test_db::insert_challenge(&pool, "frozen chall", "cat_freeze_boundary", 100, false)
                .await;

        let freeze = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
        test_db::insert_solve_at(&pool, user_id, challenge_id, freeze - Duration::seconds(1))
            .await;
        test_db::insert_solve_at(&pool, user_id, challenge_id, freeze).await;
        test_db::insert_solve_at(&pool, user_id, challenge_id, freeze + Duration::seconds(1))
            .await;

        let partials = EventRepository::solve_partials(
            &pool,
            AccountMode::Users,
            Some("cat_freeze_boundary"),
            Some(freeze),
        )
        .await
        .unwrap();

        // only the solve strictly before the freeze instant contributes
        assert_eq!(partials.len(), 1);
        assert_eq!(partials[0].account_id, user_id);
        assert_eq!(partials[0].score, 100);
    }

    #[tokio::test]
    async fn test_no_freeze_counts_every_solve() {
        let pool = test_db::test_pool().await;
        let user_id = test_db::insert_user(&pool, "no_freeze_user").await;
        let challenge_id =
            test_db::insert_challenge(&pool, "open chall", "cat_no_freeze", 40, false).await;

        let t = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
        test_db::insert_solve_at(&pool, user_id, challenge_id, t).await;
        test_db::insert_solve_at(&pool, user_id, challenge_id, t + Duration::seconds(1)).await;

        let partials =
            EventRepository::solve_partials(&pool, AccountMode::Users, Some("cat_no_freeze"), None)
                .await
                .unwrap();

        assert_eq!(partials.len(), 1);
        assert_eq!(partials[0].score, 80);
    }
}
