//! Business logic services

pub mod account_service;
pub mod auth_service;
pub mod challenge_service;
pub mod notification_service;
pub mod scoreboard_service;
pub mod visibility_service;

pub use account_service::AccountService;
pub use auth_service::AuthService;
pub use challenge_service::ChallengeService;
pub use notification_service::NotificationService;
pub use scoreboard_service::ScoreboardService;
pub use visibility_service::VisibilityService;
