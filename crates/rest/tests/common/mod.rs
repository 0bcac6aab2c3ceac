//! Shared test infrastructure for REST API tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Value, json};

use superleague_persistence::backends::sqlite::SqliteBackend;
use superleague_persistence::error::{BackendError, StorageError, StorageResult};
use superleague_persistence::{Participant, ParticipantSearchRepository, ParticipantStore};
use superleague_rest::{AppState, ServerConfig};

/// A search repository test double that records every call.
///
/// Documents live in a map keyed by participant ID; searches do a
/// case-insensitive substring match over all fields. Counters expose how
/// many index/delete calls the handlers made, and `fail_writes` makes the
/// next write surface a backend fault.
pub struct RecordingSearchRepository {
    docs: Mutex<HashMap<i64, Participant>>,
    index_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    fail_writes: AtomicBool,
}

impl RecordingSearchRepository {
    pub fn new() -> Self {
        Self {
            docs: Mutex::new(HashMap::new()),
            index_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn index_calls(&self) -> usize {
        self.index_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn indexed_count(&self) -> usize {
        self.docs.lock().unwrap().len()
    }

    /// Makes subsequent index/delete calls fail with a backend error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_failure(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend(BackendError::Unavailable {
                backend_name: "recording".to_string(),
                message: "injected failure".to_string(),
            }));
        }
        Ok(())
    }
}

#[async_trait]
impl ParticipantSearchRepository for RecordingSearchRepository {
    fn backend_name(&self) -> &'static str {
        "recording"
    }

    async fn index(&self, participant: &Participant) -> StorageResult<()> {
        self.check_failure()?;
        self.index_calls.fetch_add(1, Ordering::SeqCst);
        let id = participant.id.expect("indexed participant must have an id");
        self.docs.lock().unwrap().insert(id, participant.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        self.check_failure()?;
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.docs.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn search(&self, query: &str) -> StorageResult<Vec<Participant>> {
        let needle = query.to_lowercase();
        let docs = self.docs.lock().unwrap();
        let mut matches: Vec<Participant> = docs
            .values()
            .filter(|p| {
                p.emp_id.to_lowercase().contains(&needle)
                    || p.name.to_lowercase().contains(&needle)
                    || p.email.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        matches.sort_by_key(|p| p.id);
        Ok(matches)
    }
}

/// Creates a test server backed by an in-memory store and a recording
/// search repository.
pub async fn create_test_server() -> (
    TestServer,
    Arc<SqliteBackend>,
    Arc<RecordingSearchRepository>,
) {
    let store = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    store.init_schema().expect("Failed to init schema");
    let store = Arc::new(store);
    let search = Arc::new(RecordingSearchRepository::new());

    let config = ServerConfig::for_testing();
    let state = AppState::new(Arc::clone(&store), Arc::clone(&search), config);
    let app = superleague_rest::routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, store, search)
}

/// Builds a participant request body without an ID.
pub fn participant_body(emp_id: &str, name: &str, email: &str) -> Value {
    json!({
        "empId": emp_id,
        "name": name,
        "email": email
    })
}
