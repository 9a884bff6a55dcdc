//! Challenge response DTOs

use serde::Serialize;

use crate::models::{Challenge, SubmissionOutcome};

/// Challenge listing entry
#[derive(Debug, Serialize)]
pub struct ChallengeSummary {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub value: i32,
    pub kind: String,
}

impl From<Challenge> for ChallengeSummary {
    fn from(challenge: Challenge) -> Self {
        Self {
            id: challenge.id,
            name: challenge.name,
            category: challenge.category,
            value: challenge.value,
            kind: challenge.kind,
        }
    }
}

/// Challenge list response
#[derive(Debug, Serialize)]
pub struct ChallengesListResponse {
    pub challenges: Vec<ChallengeSummary>,
}

/// Flag submission response
#[derive(Debug, Serialize)]
pub struct AttemptResponse {
    pub outcome: SubmissionOutcome,
    pub message: String,
}
