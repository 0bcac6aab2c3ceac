//! Delete interaction handler.
//!
//! `DELETE /participants/{id}`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use superleague_persistence::{ParticipantSearchRepository, ParticipantStore};
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the delete interaction.
///
/// Deletes a participant from the primary store, then removes its document
/// from the search index. Both removals are idempotent, so the response is
/// 204 whether or not the participant existed.
///
/// # HTTP Request
///
/// `DELETE /participants/{id}`
///
/// # Response
///
/// - `204 No Content` - Always, including unknown IDs
/// - `500 Internal Server Error` - Store or search index fault
pub async fn delete_handler<S, R>(
    State(state): State<AppState<S, R>>,
    Path(id): Path<i64>,
) -> RestResult<Response>
where
    S: ParticipantStore,
    R: ParticipantSearchRepository,
{
    debug!(id, "Processing delete request");

    state.store().delete_by_id(id).await?;
    state.search().delete_by_id(id).await?;

    debug!(id, "Deleted participant");

    Ok(StatusCode::NO_CONTENT.into_response())
}
