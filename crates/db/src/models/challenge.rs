use globetrotter_core::challenge::Challenge;
use globetrotter_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `challenges` table.
#[derive(Debug, Clone, FromRow)]
pub struct ChallengeRow {
    pub id: DbId,
    pub inviter_username: String,
    pub inviter_score: i32,
    pub invite_link: String,
    pub created_at: Timestamp,
}

impl From<ChallengeRow> for Challenge {
    fn from(row: ChallengeRow) -> Self {
        Challenge {
            id: row.id,
            inviter_username: row.inviter_username,
            inviter_score: row.inviter_score,
            invite_link: row.invite_link,
            created_at: row.created_at,
        }
    }
}
