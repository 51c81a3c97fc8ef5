pub mod challenge;
pub mod destination;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /destinations/random       random destination (GET)
/// /destinations/all          every destination (GET)
///
/// /challenges/create         create challenge (POST)
/// /challenges/{id}           challenge by id (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/destinations", destination::router())
        .nest("/challenges", challenge::router())
}
