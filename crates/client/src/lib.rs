//! Client side of the Globetrotter quiz.
//!
//! [`ApiClient`](api::ApiClient) speaks the service's JSON API,
//! [`GameSession`](session::GameSession) drives the round state machine from
//! network results, and [`share`] turns a challenge into a shareable card and
//! link.

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod share;
