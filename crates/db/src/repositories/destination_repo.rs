//! Repository for the `destinations` table.

use globetrotter_core::destination::NewDestination;
use sqlx::PgPool;

use crate::models::destination::DestinationRow;

/// Column list for `destinations` queries.
const COLUMNS: &str = "id, city, country, clues, fun_fact, trivia, created_at";

/// Read access to destinations, plus the bulk insert used for seeding.
pub struct DestinationRepo;

impl DestinationRepo {
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM destinations")
            .fetch_one(pool)
            .await
    }

    /// Fetch the destination at `offset` in id order.
    ///
    /// Returns `None` when the offset is past the end, which can happen if
    /// rows disappear between counting and fetching.
    pub async fn find_at_offset(
        pool: &PgPool,
        offset: i64,
    ) -> Result<Option<DestinationRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM destinations ORDER BY id OFFSET $1 LIMIT 1");
        sqlx::query_as::<_, DestinationRow>(&query)
            .bind(offset)
            .fetch_optional(pool)
            .await
    }

    /// All destinations in id order. Unpaginated.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<DestinationRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM destinations ORDER BY id");
        sqlx::query_as::<_, DestinationRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a batch in one transaction. Either every row lands or none do.
    pub async fn insert_many(pool: &PgPool, batch: &[NewDestination]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for dest in batch {
            let result = sqlx::query(
                "INSERT INTO destinations (city, country, clues, fun_fact, trivia) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&dest.city)
            .bind(&dest.country)
            .bind(&dest.clues)
            .bind(&dest.fun_fact)
            .bind(&dest.trivia)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
