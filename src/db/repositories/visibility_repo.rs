//! Scoreboard visibility repository
//!
//! One preference row per account, keyed by user id or team id depending on
//! the account mode. The partial unique indexes on `score_visibility` make
//! the upsert race-safe: a concurrent first write loses the insert and
//! retries as an update inside the same statement.

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{AccountMode, AccountRef, ScoreVisibility, VisibleAccount},
};

/// Repository for visibility preference operations
pub struct VisibilityRepository;

impl VisibilityRepository {
    /// Stored visibility flag for an account; `None` when no row exists
    pub async fn get(pool: &PgPool, account: AccountRef) -> AppResult<Option<bool>> {
        let query = match account {
            AccountRef::User(_) => {
                r#"SELECT visible FROM score_visibility WHERE user_id = $1"#
            }
            AccountRef::Team(_) => {
                r#"SELECT visible FROM score_visibility WHERE team_id = $1"#
            }
        };

        let visible: Option<bool> = sqlx::query_scalar(query)
            .bind(account.id())
            .fetch_optional(pool)
            .await?;

        Ok(visible)
    }

    /// Upsert the visibility flag for an account
    ///
    /// Idempotent: the first call inserts the row, every later call (and any
    /// concurrent first call) updates it in place.
    pub async fn upsert(
        pool: &PgPool,
        account: AccountRef,
        visible: bool,
    ) -> AppResult<ScoreVisibility> {
        let query = match account {
            AccountRef::User(_) => {
                r#"
                INSERT INTO score_visibility (user_id, visible)
                VALUES ($1, $2)
                ON CONFLICT (user_id) WHERE user_id IS NOT NULL
                DO UPDATE SET visible = EXCLUDED.visible
                RETURNING *
                "#
            }
            AccountRef::Team(_) => {
                r#"
                INSERT INTO score_visibility (team_id, visible)
                VALUES ($1, $2)
                ON CONFLICT (team_id) WHERE team_id IS NOT NULL
                DO UPDATE SET visible = EXCLUDED.visible
                RETURNING *
                "#
            }
        };

        let row = sqlx::query_as::<_, ScoreVisibility>(query)
            .bind(account.id())
            .bind(visible)
            .fetch_one(pool)
            .await?;

        Ok(row)
    }

    /// Accounts eligible for the public scoreboard: opted in, not banned,
    /// not hidden
    pub async fn visible_accounts(
        pool: &PgPool,
        mode: AccountMode,
    ) -> AppResult<Vec<VisibleAccount>> {
        let query = match mode {
            AccountMode::Users => {
                r#"
                SELECT u.id, u.name
                FROM users u
                JOIN score_visibility v ON v.user_id = u.id
                WHERE u.banned = FALSE AND u.hidden = FALSE AND v.visible = TRUE
                "#
            }
            AccountMode::Teams => {
                r#"
                SELECT t.id, t.name
                FROM teams t
                JOIN score_visibility v ON v.team_id = t.id
                WHERE t.banned = FALSE AND t.hidden = FALSE AND v.visible = TRUE
                "#
            }
        };

        let accounts = sqlx::query_as::<_, VisibleAccount>(query)
            .fetch_all(pool)
            .await?;

        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::db as test_db;

    #[tokio::test]
    async fn test_upsert_keeps_one_row_per_account() {
        let pool = test_db::test_pool().await;
        let user_id = test_db::insert_user(&pool, "vis_upsert_user").await;
        let account = AccountRef::User(user_id);

        let row = VisibilityRepository::upsert(&pool, account, true).await.unwrap();
        assert!(row.visible);

        // opting back out updates the same row in place
        let row = VisibilityRepository::upsert(&pool, account, false).await.unwrap();
        assert!(!row.visible);

        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM score_visibility WHERE user_id = $1"#)
                .bind(user_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count, 1);

        let stored = VisibilityRepository::get(&pool, account).await.unwrap();
        assert_eq!(stored, Some(false));
    }

    #[tokio::test]
    async fn test_get_without_row_is_none() {
        let pool = test_db::test_pool().await;
        let user_id = test_db::insert_user(&pool, "vis_unset_user").await;

        let stored = VisibilityRepository::get(&pool, AccountRef::User(user_id)).await.unwrap();
        assert_eq!(stored, None);
    }
}
