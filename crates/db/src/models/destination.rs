use globetrotter_core::destination::Destination;
use globetrotter_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `destinations` table.
#[derive(Debug, Clone, FromRow)]
pub struct DestinationRow {
    pub id: DbId,
    pub city: String,
    pub country: String,
    pub clues: Vec<String>,
    pub fun_fact: Vec<String>,
    pub trivia: Vec<String>,
    pub created_at: Timestamp,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        Destination {
            id: row.id,
            city: row.city,
            country: row.country,
            clues: row.clues,
            fun_fact: row.fun_fact,
            trivia: row.trivia,
        }
    }
}
