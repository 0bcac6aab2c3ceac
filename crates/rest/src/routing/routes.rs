//! Participant route configuration.
//!
//! Defines all routes for the participant REST API.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use superleague_persistence::{ParticipantSearchRepository, ParticipantStore};

use crate::handlers;
use crate::state::AppState;

/// Creates all participant REST API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
///
/// ## Collection-level
/// - `GET /participants` - List all
/// - `POST /participants` - Create
/// - `PUT /participants` - Update (ID in body)
/// - `GET /_search/participants` - Free-text search
///
/// ## Instance-level
/// - `GET /participants/{id}` - Read
/// - `DELETE /participants/{id}` - Delete
pub fn create_routes<S, R>(state: AppState<S, R>) -> Router
where
    S: ParticipantStore + 'static,
    R: ParticipantSearchRepository + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S, R>))
        .route("/_liveness", get(handlers::health::liveness_handler))
        // Collection-level routes
        .route("/participants", get(handlers::list_handler::<S, R>))
        .route("/participants", post(handlers::create_handler::<S, R>))
        .route("/participants", put(handlers::update_handler::<S, R>))
        .route(
            "/_search/participants",
            get(handlers::search_handler::<S, R>),
        )
        // Instance-level routes
        .route("/participants/{id}", get(handlers::read_handler::<S, R>))
        .route(
            "/participants/{id}",
            delete(handlers::delete_handler::<S, R>),
        )
        // State
        .with_state(state)
}
