//! Storage backend implementations.
//!
//! Each backend lives behind its own feature flag:
//!
//! - `sqlite` - the primary relational store (default)
//! - `elasticsearch` - the secondary full-text search index

#[cfg(feature = "elasticsearch")]
pub mod elasticsearch;

#[cfg(feature = "sqlite")]
pub mod sqlite;
