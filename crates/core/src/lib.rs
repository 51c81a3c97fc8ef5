//! Domain layer for the Globetrotter quiz.
//!
//! Holds the entity types, the error taxonomy, and the pure game logic:
//! answer keys, option generation, the round state machine and invite links.
//! Nothing in here performs I/O, so both the HTTP service and the client
//! build on it.

pub mod challenge;
pub mod destination;
pub mod error;
pub mod game;
pub mod invite;
pub mod options;
pub mod types;
