//! In-process store for development and tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use globetrotter_core::challenge::{Challenge, NewChallenge};
use globetrotter_core::destination::{validate_seed_batch, Destination, NewDestination};
use globetrotter_core::types::DbId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::QuizStore;

/// Keeps destinations in insertion order and challenges keyed by id.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    destinations: RwLock<Vec<Destination>>,
    challenges: RwLock<HashMap<DbId, Challenge>>,
    invite_links: RwLock<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `destinations`, assigning fresh ids.
    ///
    /// The batch goes through the same checks as
    /// [`QuizStore::insert_destinations`]: blank or colliding cities are
    /// reported as [`StoreError::Conflict`].
    pub fn with_destinations(destinations: Vec<NewDestination>) -> Result<Self, StoreError> {
        validate_seed_batch(&destinations, std::iter::empty())
            .map_err(|e| StoreError::Conflict(e.to_string()))?;

        let records = destinations
            .into_iter()
            .map(|d| d.into_destination(Uuid::new_v4()))
            .collect();
        Ok(Self {
            destinations: RwLock::new(records),
            ..Self::default()
        })
    }
}

#[async_trait]
impl QuizStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn count_destinations(&self) -> Result<i64, StoreError> {
        Ok(self.destinations.read().await.len() as i64)
    }

    async fn destination_at(&self, offset: i64) -> Result<Option<Destination>, StoreError> {
        let Ok(index) = usize::try_from(offset) else {
            return Ok(None);
        };
        Ok(self.destinations.read().await.get(index).cloned())
    }

    async fn list_destinations(&self) -> Result<Vec<Destination>, StoreError> {
        Ok(self.destinations.read().await.clone())
    }

    async fn insert_destinations(&self, batch: &[NewDestination]) -> Result<u64, StoreError> {
        let mut destinations = self.destinations.write().await;
        validate_seed_batch(batch, destinations.iter().map(|d| d.city.as_str()))
            .map_err(|e| StoreError::Conflict(e.to_string()))?;

        destinations.extend(
            batch
                .iter()
                .cloned()
                .map(|d| d.into_destination(Uuid::new_v4())),
        );
        Ok(batch.len() as u64)
    }

    async fn invite_link_exists(&self, invite_link: &str) -> Result<bool, StoreError> {
        Ok(self.invite_links.read().await.contains(invite_link))
    }

    async fn create_challenge(&self, input: &NewChallenge) -> Result<Challenge, StoreError> {
        let mut links = self.invite_links.write().await;
        if !links.insert(input.invite_link.clone()) {
            return Err(StoreError::Conflict("uq_challenges_invite_link".into()));
        }

        let challenge = Challenge {
            id: Uuid::new_v4(),
            inviter_username: input.inviter_username.clone(),
            inviter_score: input.inviter_score,
            invite_link: input.invite_link.clone(),
            created_at: chrono::Utc::now(),
        };
        self.challenges
            .write()
            .await
            .insert(challenge.id, challenge.clone());
        Ok(challenge)
    }

    async fn find_challenge(&self, id: DbId) -> Result<Option<Challenge>, StoreError> {
        Ok(self.challenges.read().await.get(&id).cloned())
    }
}
