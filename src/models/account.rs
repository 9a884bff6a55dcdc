//! Account abstraction
//!
//! An "account" is the scoring unit: the team when the site runs in team
//! mode, otherwise the user itself.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reference to the scoring account an operation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRef {
    User(i64),
    Team(i64),
}

impl AccountRef {
    /// The underlying row id
    pub fn id(&self) -> i64 {
        match self {
            Self::User(id) | Self::Team(id) => *id,
        }
    }

    /// The word used to describe this kind of account to users
    pub fn word(&self) -> &'static str {
        match self {
            Self::User(_) => "username",
            Self::Team(_) => "team",
        }
    }
}

/// Minimal account row used by the standings join: accounts that are
/// eligible to appear on the public scoreboard (not banned, not hidden,
/// visibility opted in).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct VisibleAccount {
    pub id: i64,
    pub name: String,
}
