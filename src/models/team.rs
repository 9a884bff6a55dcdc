//! Team model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Team database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub captain_id: Option<i64>,
    pub banned: bool,
    pub hidden: bool,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Check whether the given user is the team's designated captain
    pub fn is_captain(&self, user_id: i64) -> bool {
        self.captain_id == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn team(captain_id: Option<i64>) -> Team {
        Team {
            id: 1,
            name: "red".to_string(),
            captain_id,
            banned: false,
            hidden: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_captain() {
        assert!(team(Some(7)).is_captain(7));
        assert!(!team(Some(7)).is_captain(8));
        assert!(!team(None).is_captain(7));
    }
}
