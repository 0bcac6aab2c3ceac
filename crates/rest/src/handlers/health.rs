//! Health check endpoint handlers.
//!
//! Provides simple health endpoints for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use superleague_persistence::{ParticipantSearchRepository, ParticipantStore};
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Returns a simple health status, useful for load balancers and monitoring
/// systems.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// - `200 OK` - Server is healthy
pub async fn health_handler<S, R>(State(state): State<AppState<S, R>>) -> RestResult<Response>
where
    S: ParticipantStore,
    R: ParticipantSearchRepository,
{
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "store": state.store().backend_name(),
        "searchIndex": state.search().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET /_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
