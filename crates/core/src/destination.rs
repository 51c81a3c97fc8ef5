//! Destination records and answer-key normalization.
//!
//! A destination is one quiz round's worth of content. Records are seeded
//! out-of-band and never mutated by the running service.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// A stored destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DbId,
    pub city: String,
    pub country: String,
    /// Shown progressively to the player.
    pub clues: Vec<String>,
    /// Only the first entry is revealed after answering.
    pub fun_fact: Vec<String>,
    /// Only the first entry is revealed after answering.
    pub trivia: Vec<String>,
}

impl Destination {
    /// Normalized form of [`Destination::city`] used to detect collisions.
    pub fn answer_key(&self) -> String {
        answer_key(&self.city)
    }

    pub fn first_fun_fact(&self) -> Option<&str> {
        self.fun_fact.first().map(String::as_str)
    }

    pub fn first_trivia(&self) -> Option<&str> {
        self.trivia.first().map(String::as_str)
    }
}

/// A destination as it appears in seed data, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDestination {
    pub city: String,
    pub country: String,
    pub clues: Vec<String>,
    #[serde(default)]
    pub fun_fact: Vec<String>,
    #[serde(default)]
    pub trivia: Vec<String>,
}

impl NewDestination {
    /// Attach a store-assigned id.
    pub fn into_destination(self, id: DbId) -> Destination {
        Destination {
            id,
            city: self.city,
            country: self.country,
            clues: self.clues,
            fun_fact: self.fun_fact,
            trivia: self.trivia,
        }
    }
}

/// Case-insensitive, whitespace-trimmed form of a city name.
///
/// ```
/// use globetrotter_core::destination::answer_key;
///
/// assert_eq!(answer_key("  Paris "), "paris");
/// assert_eq!(answer_key("PARIS"), answer_key("paris"));
/// ```
pub fn answer_key(city: &str) -> String {
    city.trim().to_lowercase()
}

/// Check a single seed record: city and country must be non-blank and there
/// must be at least one clue.
pub fn validate_new_destination(dest: &NewDestination) -> Result<(), CoreError> {
    if dest.city.trim().is_empty() {
        return Err(CoreError::Validation("city must not be blank".into()));
    }
    if dest.country.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "country must not be blank (city '{}')",
            dest.city
        )));
    }
    if dest.clues.is_empty() {
        return Err(CoreError::Validation(format!(
            "destination '{}' needs at least one clue",
            dest.city
        )));
    }
    Ok(())
}

/// Validate a batch of seed records, including answer-key uniqueness within
/// the batch and against `existing_keys`.
pub fn validate_seed_batch<'a, I>(batch: &[NewDestination], existing_keys: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<String> = existing_keys.into_iter().map(answer_key).collect();
    for dest in batch {
        validate_new_destination(dest)?;
        if !seen.insert(answer_key(&dest.city)) {
            return Err(CoreError::Validation(format!(
                "city '{}' collides with an existing destination",
                dest.city
            )));
        }
    }
    Ok(())
}
