//! ParticipantStore implementation for SQLite.

use async_trait::async_trait;
use rusqlite::{Row, params};

use crate::error::{BackendError, StorageError, StorageResult};
use crate::participant::Participant;
use crate::store::ParticipantStore;

use super::SqliteBackend;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn row_to_participant(row: &Row<'_>) -> rusqlite::Result<Participant> {
    Ok(Participant {
        id: Some(row.get(0)?),
        emp_id: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
    })
}

#[async_trait]
impl ParticipantStore for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn save(&self, participant: Participant) -> StorageResult<Participant> {
        let conn = self.get_connection()?;

        match participant.id {
            None => {
                conn.execute(
                    "INSERT INTO participant (emp_id, name, email) VALUES (?1, ?2, ?3)",
                    params![participant.emp_id, participant.name, participant.email],
                )
                .map_err(|e| internal_error(format!("Failed to insert participant: {}", e)))?;

                let id = conn.last_insert_rowid();
                Ok(Participant {
                    id: Some(id),
                    ..participant
                })
            }
            Some(id) => {
                // Upsert: replace the row with this id, inserting it if absent.
                conn.execute(
                    "INSERT INTO participant (id, emp_id, name, email)
                     VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                         emp_id = excluded.emp_id,
                         name = excluded.name,
                         email = excluded.email",
                    params![id, participant.emp_id, participant.name, participant.email],
                )
                .map_err(|e| internal_error(format!("Failed to upsert participant: {}", e)))?;

                Ok(participant)
            }
        }
    }

    async fn find_all(&self) -> StorageResult<Vec<Participant>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare("SELECT id, emp_id, name, email FROM participant ORDER BY id")
            .map_err(|e| internal_error(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map([], row_to_participant)
            .map_err(|e| internal_error(format!("Failed to query participants: {}", e)))?;

        let mut participants = Vec::new();
        for row in rows {
            participants
                .push(row.map_err(|e| internal_error(format!("Failed to map row: {}", e)))?);
        }
        Ok(participants)
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Participant>> {
        let conn = self.get_connection()?;

        let result = conn.query_row(
            "SELECT id, emp_id, name, email FROM participant WHERE id = ?1",
            params![id],
            row_to_participant,
        );

        match result {
            Ok(participant) => Ok(Some(participant)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(internal_error(format!("Failed to read participant: {}", e))),
        }
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        let conn = self.get_connection()?;

        // Deleting a missing row is a success; the affected-row count is
        // deliberately ignored.
        conn.execute("DELETE FROM participant WHERE id = ?1", params![id])
            .map_err(|e| internal_error(format!("Failed to delete participant: {}", e)))?;

        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM participant", [], |row| row.get(0))
            .map_err(|e| internal_error(format!("Failed to count participants: {}", e)))?;

        Ok(count as u64)
    }
}
