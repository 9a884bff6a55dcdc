//! Computest Challenges - CTF scoreboard service
//!
//! Backend for the Computest challenge site. Scoreboard display is opt-in
//! per account, standings are computed per challenge category, and a
//! dedicated challenge type emails a notification for every solve attempt.
//!
//! # Features
//!
//! - Opt-in scoreboard visibility (captain-only in team mode)
//! - Standings from solve and award events with freeze support
//! - Per-category standings
//! - Admin-only account listings, owner-only public profiles
//! - Pluggable challenge types with a notifying variant
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod challenges;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod test_utils;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
