//! Core participant store trait.
//!
//! [`ParticipantStore`] is the authoritative persistence adapter. The REST
//! layer writes here first and only mirrors successful results to the search
//! index afterwards.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::participant::Participant;

/// Authoritative CRUD storage for participants.
///
/// # Save semantics
///
/// `save` follows repository upsert semantics: an entity without an id is
/// inserted and receives a fresh, server-assigned identifier; an entity with
/// an id replaces the row with that id, inserting it if absent.
///
/// # Delete semantics
///
/// `delete_by_id` is idempotent - deleting an id that does not exist is a
/// success and leaves the store unchanged.
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Persists a participant (insert or upsert-by-id).
    ///
    /// # Returns
    ///
    /// The stored entity; for inserts the returned entity carries the newly
    /// assigned identifier.
    async fn save(&self, participant: Participant) -> StorageResult<Participant>;

    /// Returns all participants in ascending id order.
    async fn find_all(&self) -> StorageResult<Vec<Participant>>;

    /// Returns the participant with the given id, or `None`.
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Participant>>;

    /// Removes the participant with the given id, if present.
    async fn delete_by_id(&self, id: i64) -> StorageResult<()>;

    /// Counts the stored participants.
    async fn count(&self) -> StorageResult<u64>;

    /// Checks whether a participant with the given id exists.
    async fn exists(&self, id: i64) -> StorageResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
