//! Persistence for destinations and challenges.
//!
//! Handlers talk to a [`QuizStore`] trait object. [`PgStore`] is the
//! production backend (PostgreSQL via sqlx); [`MemoryStore`] keeps everything
//! in process for development and tests.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{OfflineStore, PgStore, QuizStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// The pool connects lazily: an unreachable database does not fail here, it
/// surfaces later as [`StoreError::Unavailable`] once `acquire_timeout`
/// elapses on a query.
pub fn create_pool(database_url: &str, acquire_timeout: Duration) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)
}

/// Round-trip a trivial query to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
