//! # superleague-rest - Participant REST API
//!
//! This crate provides the HTTP layer of the Super League participant
//! service: CRUD endpoints over the authoritative participant store plus a
//! free-text search endpoint backed by a secondary search index.
//!
//! ## Write path
//!
//! Every mutation writes to the primary store first, then mirrors the change
//! to the search index in the same request. The mirror write is sequential
//! and best-effort: there is no transaction spanning both systems, no retry,
//! and no reconciliation job. A mirror failure surfaces as a 500 after the
//! primary write has already committed.
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | create | POST | `/participants` |
//! | update | PUT | `/participants` |
//! | list | GET | `/participants` |
//! | read | GET | `/participants/{id}` |
//! | delete | DELETE | `/participants/{id}` |
//! | search | GET | `/_search/participants?query=...` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//!
//! ## Error Handling
//!
//! Errors are returned as a JSON body `{"error": {"code", "message"}}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Bad request / validation error |
//! | 404 | not-found | Participant not found |
//! | 500 | internal | Store or search index fault |
//!
//! ## Configuration
//!
//! The server is configured via environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SUPERLEAGUE_SERVER_PORT` | 8080 | Server port |
//! | `SUPERLEAGUE_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `SUPERLEAGUE_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `SUPERLEAGUE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `SUPERLEAGUE_ENABLE_CORS` | true | Enable CORS |
//! | `SUPERLEAGUE_CORS_ORIGINS` | * | Allowed CORS origins |
//! | `SUPERLEAGUE_BASE_URL` | http://localhost:8080 | Server base URL |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use superleague_rest::{create_app, ServerConfig};
//! use superleague_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = SqliteBackend::open("participants.db")?;
//!     let search = build_search_repository()?;
//!
//!     let app = create_app(store, search);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use superleague_persistence::{ParticipantSearchRepository, ParticipantStore};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
///
/// # Arguments
///
/// * `store` - The authoritative participant store
/// * `search` - The secondary search index repository
pub fn create_app<S, R>(store: S, search: R) -> Router
where
    S: ParticipantStore + 'static,
    R: ParticipantSearchRepository + 'static,
{
    create_app_with_config(store, search, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the participant REST API with all handlers, middleware, and
/// configuration.
///
/// # Arguments
///
/// * `store` - The authoritative participant store
/// * `search` - The secondary search index repository
/// * `config` - Server configuration
pub fn create_app_with_config<S, R>(store: S, search: R, config: ServerConfig) -> Router
where
    S: ParticipantStore + 'static,
    R: ParticipantSearchRepository + 'static,
{
    info!(
        "Creating REST API server with store: {}, search index: {}",
        store.backend_name(),
        search.backend_name()
    );

    // Create application state
    let state = AppState::new(Arc::new(store), Arc::new(search), config.clone());

    // Build the router with all participant routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("superleague_rest={},tower_http=debug", level))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
