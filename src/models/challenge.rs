//! Challenge model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Challenge database model
///
/// `kind` is the challenge-type discriminator used to resolve the
/// submission handler from the challenge-type registry
/// (`standard`, `notifying`, ...).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Challenge {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub value: i32,
    pub hidden: bool,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

/// A flag accepted as a correct answer for a challenge
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Flag {
    pub id: i64,
    pub challenge_id: i64,
    pub content: String,
}
