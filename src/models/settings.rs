//! Runtime site settings
//!
//! Settings that admins can change while the service is running live in the
//! `configs` key-value table rather than the environment. This module is the
//! typed view over that table.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::account_modes;

/// Account mode the site runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountMode {
    Users,
    Teams,
}

impl AccountMode {
    /// Parse from the stored setting value; unknown values fall back to
    /// individual mode.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(account_modes::TEAMS) => Self::Teams,
            _ => Self::Users,
        }
    }

    pub fn is_teams(&self) -> bool {
        matches!(self, Self::Teams)
    }
}

/// Snapshot of the runtime settings relevant to a single request
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub mode: AccountMode,
    /// Destination for solve/fail notification mail, if configured
    pub notification_address: Option<String>,
    /// Scoreboard freeze instant; events at or after it do not score
    pub freeze: Option<DateTime<Utc>>,
}

impl SiteSettings {
    /// Parse the stored freeze value (epoch seconds) into an instant
    pub fn parse_freeze(value: Option<&str>) -> Option<DateTime<Utc>> {
        let secs: i64 = value?.trim().parse().ok()?;
        Utc.timestamp_opt(secs, 0).single()
    }

    /// Whether the scoreboard is currently frozen
    pub fn is_frozen(&self, now: DateTime<Utc>) -> bool {
        self.freeze.is_some_and(|freeze| now >= freeze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_mode_parse() {
        assert_eq!(AccountMode::parse(Some("teams")), AccountMode::Teams);
        assert_eq!(AccountMode::parse(Some("users")), AccountMode::Users);
        assert_eq!(AccountMode::parse(Some("bogus")), AccountMode::Users);
        assert_eq!(AccountMode::parse(None), AccountMode::Users);
    }

    #[test]
    fn test_parse_freeze() {
        let freeze = SiteSettings::parse_freeze(Some("1700000000")).unwrap();
        assert_eq!(freeze.timestamp(), 1_700_000_000);

        assert!(SiteSettings::parse_freeze(Some("not a number")).is_none());
        assert!(SiteSettings::parse_freeze(None).is_none());
    }

    #[test]
    fn test_is_frozen() {
        let freeze = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
        let settings = SiteSettings {
            mode: AccountMode::Users,
            notification_address: None,
            freeze: Some(freeze),
        };

        assert!(!settings.is_frozen(freeze - chrono::Duration::seconds(1)));
        // at the freeze instant the board is already frozen
        assert!(settings.is_frozen(freeze));
        assert!(settings.is_frozen(freeze + chrono::Duration::seconds(1)));
    }
}
