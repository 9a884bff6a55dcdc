//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod accounts;
pub mod admin;
pub mod challenges;
pub mod health;
pub mod preferences;
pub mod scoreboard;

use axum::{Router, middleware};

use crate::{
    middleware::auth::{admin_only_middleware, auth_middleware},
    state::AppState,
};

/// Create all API routes
///
/// The state is needed up front because the auth middleware verifies tokens
/// against the configured secret.
pub fn routes(state: AppState) -> Router<AppState> {
    let authed = middleware::from_fn_with_state(state.clone(), auth_middleware);

    Router::new()
        .merge(health::routes())
        .merge(scoreboard::routes())
        .merge(challenges::routes(state.clone()))
        .merge(preferences::routes().route_layer(authed.clone()))
        .merge(accounts::routes().route_layer(authed.clone()))
        .nest(
            "/admin",
            admin::routes()
                .route_layer(middleware::from_fn(admin_only_middleware))
                .route_layer(authed),
        )
}
