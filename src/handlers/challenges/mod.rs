//! Challenge handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Challenge routes; listing is public, submitting requires authentication
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/challenges/{id}/attempt",
            post(handler::attempt).route_layer(middleware::from_fn_with_state(
                state,
                auth_middleware,
            )),
        )
        .route("/challenges", get(handler::list_challenges))
}
