use axum::routing::get;
use axum::Router;

use crate::handlers::destination;
use crate::state::AppState;

/// Destination routes mounted at `/api/destinations`.
///
/// ```text
/// GET /random   -> get_random
/// GET /all      -> list_all
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/random", get(destination::get_random))
        .route("/all", get(destination::list_all))
}
