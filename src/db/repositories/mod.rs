//! Database repositories

pub mod challenge_repo;
pub mod config_repo;
pub mod event_repo;
pub mod team_repo;
pub mod user_repo;
pub mod visibility_repo;

pub use challenge_repo::ChallengeRepository;
pub use config_repo::ConfigRepository;
pub use event_repo::EventRepository;
pub use team_repo::TeamRepository;
pub use user_repo::UserRepository;
pub use visibility_repo::VisibilityRepository;
