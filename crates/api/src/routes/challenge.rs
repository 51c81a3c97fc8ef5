use axum::routing::{get, post};
use axum::Router;

use crate::handlers::challenge;
use crate::state::AppState;

/// Challenge routes mounted at `/api/challenges`.
///
/// ```text
/// POST /create   -> create
/// GET  /{id}     -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(challenge::create))
        .route("/{id}", get(challenge::get_by_id))
}
