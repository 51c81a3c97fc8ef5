//! Loading destination seed data into an empty store.
//!
//! The seed file is a JSON array of destinations without ids:
//!
//! ```json
//! [{ "city": "Paris", "country": "France", "clues": ["..."], "fun_fact": ["..."], "trivia": ["..."] }]
//! ```

use std::path::Path;

use globetrotter_core::destination::{validate_seed_batch, NewDestination};
use globetrotter_core::error::CoreError;

use crate::error::StoreError;
use crate::store::QuizStore;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What [`seed_if_empty`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(u64),
    /// The collection already had this many records; nothing was written.
    AlreadySeeded(i64),
}

/// Read and validate a seed file.
pub async fn load_seed_file(path: &Path) -> Result<Vec<NewDestination>, SeedError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let batch: Vec<NewDestination> = serde_json::from_str(&raw)?;
    validate_seed_batch(&batch, std::iter::empty())?;
    Ok(batch)
}

/// Insert `batch` only when the store holds no destinations yet.
pub async fn seed_if_empty(
    store: &dyn QuizStore,
    batch: &[NewDestination],
) -> Result<SeedOutcome, SeedError> {
    let existing = store.count_destinations().await?;
    if existing > 0 {
        tracing::info!(existing, "Destinations already present, skipping seed");
        return Ok(SeedOutcome::AlreadySeeded(existing));
    }

    let inserted = store.insert_destinations(batch).await?;
    tracing::info!(inserted, "Seeded destinations");
    Ok(SeedOutcome::Inserted(inserted))
}
