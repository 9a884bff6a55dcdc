//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{challenges::ChallengeTypeRegistry, config::Config};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Config,

    /// Challenge-type registry resolved at submission time
    pub challenge_types: ChallengeTypeRegistry,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, config: Config, challenge_types: ChallengeTypeRegistry) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                config,
                challenge_types,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get a reference to the challenge-type registry
    pub fn challenge_types(&self) -> &ChallengeTypeRegistry {
        &self.inner.challenge_types
    }
}
