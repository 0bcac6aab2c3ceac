//! Read interaction handler.
//!
//! `GET /participants/{id}`

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use superleague_persistence::{ParticipantSearchRepository, ParticipantStore};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the read interaction.
///
/// Fetches a single participant by ID from the primary store.
///
/// # HTTP Request
///
/// `GET /participants/{id}`
///
/// # Response
///
/// - `200 OK` - Participant found, body = entity
/// - `404 Not Found` - No participant with the given ID
pub async fn read_handler<S, R>(
    State(state): State<AppState<S, R>>,
    Path(id): Path<i64>,
) -> RestResult<Response>
where
    S: ParticipantStore,
    R: ParticipantSearchRepository,
{
    debug!(id, "Processing read request");

    let participant = state
        .store()
        .find_by_id(id)
        .await?
        .ok_or(RestError::NotFound { id })?;

    Ok(Json(participant).into_response())
}
