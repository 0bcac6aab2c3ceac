//! # superleague-persistence - Participant Persistence Layer
//!
//! This crate provides the two storage adapters behind the Super League
//! participant service:
//!
//! - [`ParticipantStore`](store::ParticipantStore) - the authoritative
//!   relational store for participants (SQLite implementation behind the
//!   `sqlite` feature)
//! - [`ParticipantSearchRepository`](search::ParticipantSearchRepository) -
//!   the secondary full-text search index (Elasticsearch implementation
//!   behind the `elasticsearch` feature)
//!
//! The primary store is the source of truth. The search index is a
//! denormalized mirror that the REST layer updates best-effort after every
//! mutation; it may transiently diverge from the primary store.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use superleague_persistence::backends::sqlite::SqliteBackend;
//! use superleague_persistence::participant::Participant;
//! use superleague_persistence::store::ParticipantStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteBackend::in_memory()?;
//! store.init_schema()?;
//!
//! let saved = store
//!     .save(Participant::new("EMP-001", "Ada Lovelace", "ada@superleague.example"))
//!     .await?;
//! assert!(saved.id.is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod error;
pub mod participant;
pub mod search;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use participant::Participant;
pub use search::ParticipantSearchRepository;
pub use store::ParticipantStore;
