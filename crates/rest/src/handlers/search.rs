//! Search interaction handler.
//!
//! `GET /_search/participants?query=...`

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use superleague_persistence::{ParticipantSearchRepository, ParticipantStore};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Query parameters for the search interaction.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The free-text query string.
    pub query: Option<String>,
}

/// Handler for the search interaction.
///
/// Forwards the query to the search index. Results reflect the state of the
/// mirror, which may transiently diverge from the primary store.
///
/// # HTTP Request
///
/// `GET /_search/participants?query=...`
///
/// # Response
///
/// - `200 OK` - JSON array of matching participants, relevance-ordered
/// - `400 Bad Request` - Missing `query` parameter
/// - `500 Internal Server Error` - Search index fault
pub async fn search_handler<S, R>(
    State(state): State<AppState<S, R>>,
    Query(params): Query<SearchParams>,
) -> RestResult<Response>
where
    S: ParticipantStore,
    R: ParticipantSearchRepository,
{
    let query = params.query.ok_or_else(|| RestError::BadRequest {
        message: "Missing required parameter: query".to_string(),
    })?;

    debug!(query = %query, "Processing search request");

    let participants = state.search().search(&query).await?;

    debug!(count = participants.len(), "Search complete");

    Ok(Json(participants).into_response())
}
