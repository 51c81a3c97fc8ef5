use axum::extract::{Path, State};
use axum::Json;
use globetrotter_core::challenge::{validate_create_challenge, Challenge, CreateChallenge, NewChallenge};
use globetrotter_core::error::CoreError;
use globetrotter_core::invite::{generate_invite_token, invite_link, MAX_INVITE_LINK_ATTEMPTS};
use globetrotter_core::types::DbId;
use globetrotter_db::StoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/challenges/create
///
/// Generate an invite link and persist the challenge. A link that already
/// exists (checked up front, or rejected by the store's unique constraint)
/// is regenerated up to [`MAX_INVITE_LINK_ATTEMPTS`] times. Answers 200 with
/// the stored record.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateChallenge>,
) -> AppResult<Json<Challenge>> {
    validate_create_challenge(&input)?;

    for attempt in 1..=MAX_INVITE_LINK_ATTEMPTS {
        let link = invite_link(&state.config.invite_base_url, &generate_invite_token());

        if state.store.invite_link_exists(&link).await? {
            tracing::warn!(attempt, %link, "Invite link already taken, regenerating");
            continue;
        }

        let new_challenge = NewChallenge {
            inviter_username: input.inviter_username.clone(),
            inviter_score: input.inviter_score,
            invite_link: link,
        };

        match state.store.create_challenge(&new_challenge).await {
            Ok(challenge) => {
                tracing::info!(
                    challenge_id = %challenge.id,
                    inviter = %challenge.inviter_username,
                    score = challenge.inviter_score,
                    "Challenge created"
                );
                return Ok(Json(challenge));
            }
            Err(StoreError::Conflict(constraint)) => {
                tracing::warn!(attempt, %constraint, "Invite link collided on insert, regenerating");
            }
            Err(other) => return Err(other.into()),
        }
    }

    Err(AppError::InternalError(format!(
        "no unique invite link after {MAX_INVITE_LINK_ATTEMPTS} attempts"
    )))
}

/// GET /api/challenges/{id}
///
/// Ids that are not valid UUIDs are reported as not found, the same as ids
/// that do not exist.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Challenge>> {
    let not_found = || CoreError::NotFound {
        entity: "Challenge",
        id: raw_id.clone(),
    };

    let id: DbId = raw_id.parse().map_err(|_| not_found())?;
    let challenge = state.store.find_challenge(id).await?.ok_or_else(not_found)?;

    Ok(Json(challenge))
}
