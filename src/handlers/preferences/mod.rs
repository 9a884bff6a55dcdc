//! Profile preference handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Preference routes (authenticated)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile/preferences", get(handler::get_preferences))
        .route("/profile/preferences", post(handler::set_preferences))
}
