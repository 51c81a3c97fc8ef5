use std::sync::Arc;

use globetrotter_db::QuizStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Destination and challenge persistence.
    pub store: Arc<dyn QuizStore>,
    pub config: Arc<ServerConfig>,
}
