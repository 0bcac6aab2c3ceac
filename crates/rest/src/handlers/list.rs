//! List interaction handler.
//!
//! `GET /participants`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use superleague_persistence::{ParticipantSearchRepository, ParticipantStore};
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the list interaction.
///
/// Returns all participants from the primary store in ascending ID order.
///
/// # HTTP Request
///
/// `GET /participants`
///
/// # Response
///
/// - `200 OK` - JSON array of participants (empty array when none exist)
pub async fn list_handler<S, R>(State(state): State<AppState<S, R>>) -> RestResult<Response>
where
    S: ParticipantStore,
    R: ParticipantSearchRepository,
{
    debug!("Processing list request");

    let participants = state.store().find_all().await?;

    debug!(count = participants.len(), "Listed participants");

    Ok(Json(participants).into_response())
}
