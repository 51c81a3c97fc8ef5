//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` (or a transaction) as the first argument.

pub mod challenge_repo;
pub mod destination_repo;

pub use challenge_repo::ChallengeRepo;
pub use destination_repo::DestinationRepo;
