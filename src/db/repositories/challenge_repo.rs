//! Challenge repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Challenge, Flag},
};

/// Repository for challenge database operations
pub struct ChallengeRepository;

impl ChallengeRepository {
    /// Create a new challenge together with its flag
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        name: &str,
        description: &str,
        category: &str,
        value: i32,
        hidden: bool,
        kind: &str,
        flag: &str,
    ) -> AppResult<Challenge> {
        let mut tx = pool.begin().await?;

        let challenge = sqlx::query_as::<_, Challenge>(
            r#"
            INSERT INTO challenges (name, description, category, value, hidden, kind)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(category)
        .bind(value)
        .bind(hidden)
        .bind(kind)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(r#"INSERT INTO flags (challenge_id, content) VALUES ($1, $2)"#)
            .bind(challenge.id)
            .bind(flag)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(challenge)
    }

    /// Find challenge by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Challenge>> {
        let challenge = sqlx::query_as::<_, Challenge>(r#"SELECT * FROM challenges WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(challenge)
    }

    /// List challenges, optionally including hidden ones
    pub async fn list(pool: &PgPool, include_hidden: bool) -> AppResult<Vec<Challenge>> {
        let challenges = sqlx::query_as::<_, Challenge>(
            r#"
            SELECT * FROM challenges
            WHERE ($1 OR hidden = FALSE)
            ORDER BY category, value, id
            "#,
        )
        .bind(include_hidden)
        .fetch_all(pool)
        .await?;

        Ok(challenges)
    }

    /// Flags registered for a challenge
    pub async fn flags(pool: &PgPool, challenge_id: i64) -> AppResult<Vec<Flag>> {
        let flags = sqlx::query_as::<_, Flag>(r#"SELECT * FROM flags WHERE challenge_id = $1"#)
            .bind(challenge_id)
            .fetch_all(pool)
            .await?;

        Ok(flags)
    }

    /// Distinct categories across all challenges
    ///
    /// Hidden challenges count here: awards can carry a category that only
    /// hidden challenges use, and the per-category standings still need a
    /// bucket for those points.
    pub async fn distinct_categories(pool: &PgPool) -> AppResult<Vec<String>> {
        let categories: Vec<String> = sqlx::query_scalar(
            r#"SELECT DISTINCT category FROM challenges ORDER BY category"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::db as test_db;

    #[tokio::test]
    async fn test_distinct_categories_cover_hidden_only_categories() {
        let pool = test_db::test_pool().await;
        test_db::insert_challenge(&pool, "open chall", "cat_open_only", 100, false).await;
        test_db::insert_challenge(&pool, "secret chall", "cat_hidden_only", 100, true).await;

        let categories = ChallengeRepository::distinct_categories(&pool).await.unwrap();

        assert!(categories.contains(&"cat_open_only".to_string()));
        assert!(categories.contains(&"cat_hidden_only".to_string()));
    }
}
