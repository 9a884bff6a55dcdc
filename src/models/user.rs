//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::roles;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub banned: bool,
    pub hidden: bool,
    pub team_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }
}
