//! Award model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Manually granted score adjustment for an account
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Award {
    pub id: i64,
    pub user_id: i64,
    pub team_id: Option<i64>,
    pub name: String,
    pub category: Option<String>,
    pub value: i32,
    pub awarded_at: DateTime<Utc>,
}
