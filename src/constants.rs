//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

// =============================================================================
// MAIL DEFAULTS
// =============================================================================

/// Default SMTP host
pub const DEFAULT_SMTP_HOST: &str = "localhost";

/// Default SMTP port (submission)
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender display name for notification mail
pub const DEFAULT_MAIL_FROM_NAME: &str = "Computest Challenges";

// =============================================================================
// RUNTIME SETTINGS KEYS
// =============================================================================

/// Keys into the `configs` table (runtime-mutable site settings)
pub mod settings_keys {
    /// Destination address for solve/fail notification mail
    pub const CHALLENGE_NOTIFICATION_ADDRESS: &str = "challenge_notification_address";

    /// Scoreboard freeze instant, stored as epoch seconds
    pub const FREEZE: &str = "freeze";

    /// Account mode the site runs in (`users` or `teams`)
    pub const ACCOUNT_MODE: &str = "account_mode";
}

// =============================================================================
// ACCOUNT MODES
// =============================================================================

/// Account mode identifiers
pub mod account_modes {
    pub const USERS: &str = "users";
    pub const TEAMS: &str = "teams";

    /// All supported account modes
    pub const ALL: &[&str] = &[USERS, TEAMS];
}

// =============================================================================
// USER ROLES
// =============================================================================

/// Role identifiers
pub mod roles {
    pub const USER: &str = "user";
    pub const ADMIN: &str = "admin";

    /// All supported roles
    pub const ALL: &[&str] = &[USER, ADMIN];
}

// =============================================================================
// CHALLENGE TYPES
// =============================================================================

/// Challenge type identifiers (the `kind` discriminator column)
pub mod challenge_kinds {
    pub const STANDARD: &str = "standard";
    pub const NOTIFYING: &str = "notifying";

    /// All registered challenge kinds
    pub const ALL: &[&str] = &[STANDARD, NOTIFYING];
}

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum length of a submitted flag
pub const MAX_SUBMISSION_LENGTH: u64 = 1024;
