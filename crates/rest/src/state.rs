//! Application state for the participant REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the authoritative participant store, the secondary
//! search index repository, and the server configuration.

use std::sync::Arc;

use superleague_persistence::{ParticipantSearchRepository, ParticipantStore};

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The participant store type (must implement [`ParticipantStore`])
/// * `R` - The search repository type (must implement
///   [`ParticipantSearchRepository`])
pub struct AppState<S, R> {
    /// The authoritative participant store.
    store: Arc<S>,

    /// The secondary search index repository.
    search: Arc<R>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S and R are wrapped in Arc and don't need to
// be Clone themselves
impl<S, R> Clone for AppState<S, R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            search: Arc::clone(&self.search),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S, R> AppState<S, R>
where
    S: ParticipantStore,
    R: ParticipantSearchRepository,
{
    /// Creates a new AppState with the given store, search repository, and
    /// configuration.
    pub fn new(store: Arc<S>, search: Arc<R>, config: ServerConfig) -> Self {
        Self {
            store,
            search,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the participant store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the search repository.
    pub fn search(&self) -> &R {
        &self.search
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
