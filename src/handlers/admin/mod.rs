//! Admin handlers

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

/// Admin routes (mounted under `/admin`, admin-gated by middleware)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/computest", get(handler::get_settings))
        .route("/computest", post(handler::set_settings))
        .route("/challenges", post(handler::create_challenge))
        .route("/awards", post(handler::create_award))
}
