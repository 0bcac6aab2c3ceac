//! SQLite backend implementation.
//!
//! The primary store for participants. Supports both in-memory databases
//! (used throughout the tests) and file-based databases.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE participant (
//!     id     INTEGER PRIMARY KEY AUTOINCREMENT,
//!     emp_id TEXT NOT NULL,
//!     name   TEXT NOT NULL,
//!     email  TEXT NOT NULL
//! );
//! ```
//!
//! # Example
//!
//! ```no_run
//! use superleague_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod schema;
mod store;

pub use backend::{SqliteBackend, SqliteBackendConfig};
