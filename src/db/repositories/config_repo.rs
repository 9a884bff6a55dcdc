//! Runtime settings repository
//!
//! Key-value store backing the admin-mutable site settings.

use sqlx::PgPool;

use crate::{
    constants::settings_keys,
    error::AppResult,
    models::{AccountMode, SiteSettings},
};

/// Repository for the `configs` key-value table
pub struct ConfigRepository;

impl ConfigRepository {
    /// Read a setting value
    pub async fn get(pool: &PgPool, key: &str) -> AppResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar(r#"SELECT value FROM configs WHERE key = $1"#)
                .bind(key)
                .fetch_optional(pool)
                .await?;

        Ok(value)
    }

    /// Write a setting value (upsert)
    pub async fn set(pool: &PgPool, key: &str, value: &str) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO configs (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Remove a setting
    pub async fn unset(pool: &PgPool, key: &str) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM configs WHERE key = $1"#)
            .bind(key)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Load the typed settings snapshot used by scoreboard and notification
    /// code paths
    pub async fn load_settings(pool: &PgPool) -> AppResult<SiteSettings> {
        let mode = Self::get(pool, settings_keys::ACCOUNT_MODE).await?;
        let notification_address =
            Self::get(pool, settings_keys::CHALLENGE_NOTIFICATION_ADDRESS).await?;
        let freeze = Self::get(pool, settings_keys::FREEZE).await?;

        Ok(SiteSettings {
            mode: AccountMode::parse(mode.as_deref()),
            notification_address: notification_address.filter(|a| !a.is_empty()),
            freeze: SiteSettings::parse_freeze(freeze.as_deref()),
        })
    }
}
