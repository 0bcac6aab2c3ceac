//! Create interaction handler.
//!
//! `POST /participants`

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use superleague_persistence::{Participant, ParticipantSearchRepository, ParticipantStore};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the create interaction.
///
/// Creates a new participant. The server assigns the ID; a pre-assigned ID
/// is rejected. After the primary-store write succeeds, the participant is
/// mirrored to the search index.
///
/// # HTTP Request
///
/// `POST /participants`
///
/// # Response
///
/// - `201 Created` - Participant created, `Location` header set, body =
///   persisted entity with its assigned ID
/// - `400 Bad Request` - ID already set, or a required field missing/empty
/// - `500 Internal Server Error` - Store or search index fault
pub async fn create_handler<S, R>(
    State(state): State<AppState<S, R>>,
    Json(participant): Json<Participant>,
) -> RestResult<Response>
where
    S: ParticipantStore,
    R: ParticipantSearchRepository,
{
    debug!(emp_id = %participant.emp_id, "Processing create request");

    if participant.id.is_some() {
        return Err(RestError::BadRequest {
            message: "A new participant cannot already have an ID".to_string(),
        });
    }
    participant.validate()?;

    let saved = state.store().save(participant).await?;
    state.search().index(&saved).await?;

    // save assigns the id, so unwrap_or(0) is unreachable in practice
    let id = saved.id.unwrap_or(0);
    let location = format!("{}/participants/{}", state.base_url(), id);

    debug!(id, "Created participant");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(saved),
    )
        .into_response())
}
