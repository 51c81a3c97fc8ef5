//! Startup wiring: choosing the store backend and optional seeding.
//!
//! Nothing here aborts the process. A store that cannot be reached is
//! logged and left in place, so the listener still comes up and data
//! requests fail with an unavailable error until the database returns.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use globetrotter_db::seed::{load_seed_file, seed_if_empty, SeedError, SeedOutcome};
use globetrotter_db::{MemoryStore, OfflineStore, PgStore, QuizStore};

use crate::config::{ServerConfig, StoreBackend};

/// Build the configured store and, for PostgreSQL, check connectivity and
/// apply migrations.
pub async fn connect_store(config: &ServerConfig) -> Arc<dyn QuizStore> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory store");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Postgres => connect_postgres(config).await,
    }
}

async fn connect_postgres(config: &ServerConfig) -> Arc<dyn QuizStore> {
    let acquire_timeout = Duration::from_secs(config.db_acquire_timeout_secs);
    let pool = match globetrotter_db::create_pool(&config.database_url, acquire_timeout) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Invalid DATABASE_URL, data operations are disabled");
            return Arc::new(OfflineStore::new(e.to_string()));
        }
    };
    tracing::info!("Database connection pool created");

    match globetrotter_db::health_check(&pool).await {
        Ok(()) => {
            tracing::info!("Database health check passed");
            match globetrotter_db::run_migrations(&pool).await {
                Ok(()) => tracing::info!("Database migrations applied"),
                Err(e) => tracing::error!(error = %e, "Failed to run database migrations"),
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
        }
    }

    Arc::new(PgStore::new(pool))
}

/// Load `path` into the store if the destination collection is empty.
pub async fn seed_from_file(
    store: &dyn QuizStore,
    path: &Path,
) -> Result<SeedOutcome, SeedError> {
    let batch = load_seed_file(path).await?;
    tracing::info!(path = %path.display(), records = batch.len(), "Loaded seed file");
    seed_if_empty(store, &batch).await
}
