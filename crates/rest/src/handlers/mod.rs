//! HTTP request handlers for participant interactions.
//!
//! This module contains handlers for all participant REST API interactions:
//!
//! - [`create`] - Create a new participant
//! - [`update`] - Update an existing participant
//! - [`list`] - List all participants
//! - [`read`] - Read a participant by ID
//! - [`delete`] - Delete a participant
//! - [`search`] - Free-text search over the search index
//! - [`health`] - Health check endpoints

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod search;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use read::read_handler;
pub use search::search_handler;
pub use update::update_handler;
