use axum::extract::State;
use axum::Json;
use globetrotter_core::destination::Destination;
use globetrotter_core::error::CoreError;
use rand::Rng;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/destinations/random
///
/// Count, then fetch the record at a uniformly chosen offset.
pub async fn get_random(State(state): State<AppState>) -> AppResult<Json<Destination>> {
    let count = state.store.count_destinations().await?;
    if count == 0 {
        return Err(CoreError::EmptyCollection {
            entity: "destination",
        }
        .into());
    }

    let offset = rand::rng().random_range(0..count);
    let destination = state
        .store
        .destination_at(offset)
        .await?
        .ok_or(CoreError::EmptyCollection {
            entity: "destination",
        })?;

    tracing::debug!(offset, count, city = %destination.city, "Picked random destination");

    Ok(Json(destination))
}

/// GET /api/destinations/all
///
/// The whole collection, unpaginated.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Destination>>> {
    let destinations = state.store.list_destinations().await?;
    Ok(Json(destinations))
}
