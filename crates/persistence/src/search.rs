//! Search index adapter trait.
//!
//! [`ParticipantSearchRepository`] is the secondary, full-text-searchable
//! mirror of the primary store. Writes to it are best-effort: there is no
//! transactional coupling with the primary store, no retry, and no
//! reconciliation job. The index may transiently diverge from the store.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::participant::Participant;

/// Secondary full-text search index for participants.
#[async_trait]
pub trait ParticipantSearchRepository: Send + Sync {
    /// Returns a human-readable name for this search backend.
    fn backend_name(&self) -> &'static str;

    /// Indexes (or re-indexes) a persisted participant.
    ///
    /// The participant must carry its server-assigned id; the document id in
    /// the index is derived from it so repeated calls overwrite rather than
    /// duplicate.
    async fn index(&self, participant: &Participant) -> StorageResult<()>;

    /// Removes a participant document from the index, if present.
    ///
    /// Idempotent - removing an id that was never indexed is a success.
    async fn delete_by_id(&self, id: i64) -> StorageResult<()>;

    /// Runs a free-text query and returns all matching participants.
    ///
    /// A missing index (nothing indexed yet) yields an empty result rather
    /// than an error.
    async fn search(&self, query: &str) -> StorageResult<Vec<Participant>>;
}
