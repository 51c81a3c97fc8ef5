//! The store abstraction handlers depend on, and its PostgreSQL backend.

use async_trait::async_trait;
use globetrotter_core::challenge::{Challenge, NewChallenge};
use globetrotter_core::destination::{Destination, NewDestination};
use globetrotter_core::types::DbId;

use crate::error::StoreError;
use crate::repositories::{ChallengeRepo, DestinationRepo};
use crate::DbPool;

/// Everything the quiz service needs from persistence.
///
/// Destinations are read-only apart from [`QuizStore::insert_destinations`],
/// which exists for seeding. Challenges are insert-only.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Confirm the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn count_destinations(&self) -> Result<i64, StoreError>;

    /// The destination at a zero-based `offset` in a stable order.
    async fn destination_at(&self, offset: i64) -> Result<Option<Destination>, StoreError>;

    async fn list_destinations(&self) -> Result<Vec<Destination>, StoreError>;

    /// Insert seed records atomically. Answer-key collisions are reported as
    /// [`StoreError::Conflict`].
    async fn insert_destinations(&self, batch: &[NewDestination]) -> Result<u64, StoreError>;

    async fn invite_link_exists(&self, invite_link: &str) -> Result<bool, StoreError>;

    /// Persist a challenge. A duplicate invite link is reported as
    /// [`StoreError::Conflict`].
    async fn create_challenge(&self, input: &NewChallenge) -> Result<Challenge, StoreError>;

    async fn find_challenge(&self, id: DbId) -> Result<Option<Challenge>, StoreError>;
}

/// PostgreSQL-backed store delegating to the repositories.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl QuizStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn count_destinations(&self) -> Result<i64, StoreError> {
        Ok(DestinationRepo::count(&self.pool).await?)
    }

    async fn destination_at(&self, offset: i64) -> Result<Option<Destination>, StoreError> {
        let row = DestinationRepo::find_at_offset(&self.pool, offset).await?;
        Ok(row.map(Destination::from))
    }

    async fn list_destinations(&self) -> Result<Vec<Destination>, StoreError> {
        let rows = DestinationRepo::list_all(&self.pool).await?;
        Ok(rows.into_iter().map(Destination::from).collect())
    }

    async fn insert_destinations(&self, batch: &[NewDestination]) -> Result<u64, StoreError> {
        Ok(DestinationRepo::insert_many(&self.pool, batch).await?)
    }

    async fn invite_link_exists(&self, invite_link: &str) -> Result<bool, StoreError> {
        Ok(ChallengeRepo::link_exists(&self.pool, invite_link).await?)
    }

    async fn create_challenge(&self, input: &NewChallenge) -> Result<Challenge, StoreError> {
        let row = ChallengeRepo::create(&self.pool, input).await?;
        Ok(row.into())
    }

    async fn find_challenge(&self, id: DbId) -> Result<Option<Challenge>, StoreError> {
        let row = ChallengeRepo::find_by_id(&self.pool, id).await?;
        Ok(row.map(Challenge::from))
    }
}

/// Stand-in used when no backend could be configured at all (for example a
/// malformed `DATABASE_URL`). Every call reports [`StoreError::Unavailable`].
pub struct OfflineStore {
    reason: String,
}

impl OfflineStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn unavailable<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl QuizStore for OfflineStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.unavailable()
    }

    async fn count_destinations(&self) -> Result<i64, StoreError> {
        self.unavailable()
    }

    async fn destination_at(&self, _offset: i64) -> Result<Option<Destination>, StoreError> {
        self.unavailable()
    }

    async fn list_destinations(&self) -> Result<Vec<Destination>, StoreError> {
        self.unavailable()
    }

    async fn insert_destinations(&self, _batch: &[NewDestination]) -> Result<u64, StoreError> {
        self.unavailable()
    }

    async fn invite_link_exists(&self, _invite_link: &str) -> Result<bool, StoreError> {
        self.unavailable()
    }

    async fn create_challenge(&self, _input: &NewChallenge) -> Result<Challenge, StoreError> {
        self.unavailable()
    }

    async fn find_challenge(&self, _id: DbId) -> Result<Option<Challenge>, StoreError> {
        self.unavailable()
    }
}
