//! Repository for the `challenges` table.

use globetrotter_core::challenge::NewChallenge;
use globetrotter_core::types::DbId;
use sqlx::PgPool;

use crate::models::challenge::ChallengeRow;

/// Column list for `challenges` queries.
const COLUMNS: &str = "id, inviter_username, inviter_score, invite_link, created_at";

/// Insert and lookup for challenges. There is no update or delete path.
pub struct ChallengeRepo;

impl ChallengeRepo {
    pub async fn create(pool: &PgPool, input: &NewChallenge) -> Result<ChallengeRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO challenges (inviter_username, inviter_score, invite_link) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChallengeRow>(&query)
            .bind(&input.inviter_username)
            .bind(input.inviter_score)
            .bind(&input.invite_link)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ChallengeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM challenges WHERE id = $1");
        sqlx::query_as::<_, ChallengeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn link_exists(pool: &PgPool, invite_link: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM challenges WHERE invite_link = $1)")
            .bind(invite_link)
            .fetch_one(pool)
            .await
    }
}
