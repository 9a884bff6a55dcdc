//! Challenge types
//!
//! A challenge row carries a `kind` discriminator; the registry maps it to
//! the handler that records solve/fail events for that type. Registered at
//! startup, resolved per submission.

pub mod notifying;
pub mod standard;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Challenge, Fail, SiteSettings, Solve, User},
    state::AppState,
};

pub use notifying::NotifyingChallenge;
pub use standard::StandardChallenge;

/// Submission handler for one challenge type
#[async_trait]
pub trait ChallengeType: Send + Sync {
    /// The `kind` discriminator this handler is registered under
    fn id(&self) -> &'static str;

    /// Record a correct submission
    async fn solve(
        &self,
        state: &AppState,
        settings: &SiteSettings,
        user: &User,
        challenge: &Challenge,
        submission: &str,
    ) -> AppResult<Solve>;

    /// Record an incorrect submission
    async fn fail(
        &self,
        state: &AppState,
        settings: &SiteSettings,
        user: &User,
        challenge: &Challenge,
        submission: &str,
    ) -> AppResult<Fail>;
}

/// Process-wide mapping from challenge kind to its handler
#[derive(Clone, Default)]
pub struct ChallengeTypeRegistry {
    types: HashMap<&'static str, Arc<dyn ChallengeType>>,
}

impl ChallengeTypeRegistry {
    /// Registry with the built-in challenge types
    pub fn with_builtin() -> Self {
        let mut registry = Self::default();
        registry.register(Arc::new(StandardChallenge));
        registry.register(Arc::new(NotifyingChallenge));
        registry
    }

    /// Register a challenge type under its id
    pub fn register(&mut self, challenge_type: Arc<dyn ChallengeType>) {
        self.types.insert(challenge_type.id(), challenge_type);
    }

    /// Resolve the handler for a challenge kind
    pub fn get(&self, kind: &str) -> Option<Arc<dyn ChallengeType>> {
        self.types.get(kind).cloned()
    }

    /// Whether a kind is registered
    pub fn contains(&self, kind: &str) -> bool {
        self.types.contains_key(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::challenge_kinds;

    #[test]
    fn test_builtin_registry() {
        let registry = ChallengeTypeRegistry::with_builtin();
        assert!(registry.contains(challenge_kinds::STANDARD));
        assert!(registry.contains(challenge_kinds::NOTIFYING));
        assert!(!registry.contains("dynamic"));
        assert_eq!(
            registry.get(challenge_kinds::NOTIFYING).unwrap().id(),
            challenge_kinds::NOTIFYING
        );
    }
}
