//! Request handlers.
//!
//! Handlers are stateless: each one reads what it needs from the
//! [`QuizStore`](globetrotter_db::QuizStore) in [`AppState`](crate::state::AppState)
//! and maps failures via [`AppError`](crate::error::AppError).

pub mod challenge;
pub mod destination;
