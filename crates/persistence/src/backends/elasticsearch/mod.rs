//! Elasticsearch backend implementation.
//!
//! The secondary, full-text-searchable mirror of the participant store.
//! Documents are written here best-effort after every primary-store mutation;
//! the index is never authoritative.
//!
//! Index layout: a single index named `{prefix}_participant` holds one
//! document per participant, keyed by the decimal participant id.

mod backend;
mod schema;
mod search;

pub use backend::{ElasticsearchAuth, ElasticsearchBackend, ElasticsearchConfig};
