//! "Challenge a friend" records.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// A stored challenge. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: DbId,
    pub inviter_username: String,
    pub inviter_score: i32,
    pub invite_link: String,
    pub created_at: Timestamp,
}

/// Request body for `POST /api/challenges/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChallenge {
    pub inviter_username: String,
    pub inviter_score: i32,
}

/// Fully-formed insert: the request plus the generated invite link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChallenge {
    pub inviter_username: String,
    pub inviter_score: i32,
    pub invite_link: String,
}

/// The username is deliberately unchecked; only the score carries an
/// invariant.
pub fn validate_create_challenge(input: &CreateChallenge) -> Result<(), CoreError> {
    if input.inviter_score < 0 {
        return Err(CoreError::Validation(format!(
            "inviter_score must be >= 0, got {}",
            input.inviter_score
        )));
    }
    Ok(())
}
