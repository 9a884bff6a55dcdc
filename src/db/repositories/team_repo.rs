//! Team repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Team};

/// Repository for team database operations
pub struct TeamRepository;

impl TeamRepository {
    /// Find team by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(team)
    }

    /// List all teams, newest first
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<(Vec<Team>, i64)> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT * FROM teams
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM teams"#)
            .fetch_one(pool)
            .await?;

        Ok((teams, count))
    }
}
