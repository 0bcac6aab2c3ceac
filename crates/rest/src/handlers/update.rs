//! Update interaction handler.
//!
//! `PUT /participants`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use superleague_persistence::{Participant, ParticipantSearchRepository, ParticipantStore};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the update interaction.
///
/// Updates a participant identified by the ID in the request body. An ID is
/// required; the write is an upsert, so an unknown ID creates the row. After
/// the primary-store write succeeds, the participant is mirrored to the
/// search index.
///
/// # HTTP Request
///
/// `PUT /participants`
///
/// # Response
///
/// - `200 OK` - Participant saved, body = persisted entity
/// - `400 Bad Request` - ID missing, or a required field missing/empty
/// - `500 Internal Server Error` - Store or search index fault
pub async fn update_handler<S, R>(
    State(state): State<AppState<S, R>>,
    Json(participant): Json<Participant>,
) -> RestResult<Response>
where
    S: ParticipantStore,
    R: ParticipantSearchRepository,
{
    debug!(id = ?participant.id, "Processing update request");

    if participant.id.is_none() {
        return Err(RestError::BadRequest {
            message: "Invalid id".to_string(),
        });
    }
    participant.validate()?;

    let saved = state.store().save(participant).await?;
    state.search().index(&saved).await?;

    debug!(id = ?saved.id, "Updated participant");

    Ok(Json(saved).into_response())
}
