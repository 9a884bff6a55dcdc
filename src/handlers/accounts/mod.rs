//! Account listing and profile handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Account routes (authenticated; service layer applies the
/// admin/owner policy)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handler::list_users))
        .route("/users/{id}", get(handler::get_user))
        .route("/teams", get(handler::list_teams))
        .route("/teams/{id}", get(handler::get_team))
}
