//! Scoreboard handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Scoreboard routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/scoreboard", get(handler::scoreboard_listing))
}
