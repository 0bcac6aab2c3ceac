//! ParticipantSearchRepository implementation for Elasticsearch.
//!
//! Mirror writes arrive here after every primary-store mutation. Searches run
//! a `query_string` query across all participant fields, matching documents
//! ranked by relevance.

use async_trait::async_trait;
use elasticsearch::{DeleteParts, IndexParts, SearchParts};
use serde_json::{Value, json};

use crate::error::{BackendError, StorageError, StorageResult, ValidationError};
use crate::participant::Participant;
use crate::search::ParticipantSearchRepository;

use super::backend::ElasticsearchBackend;
use super::schema;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "elasticsearch".to_string(),
        message,
        source: None,
    })
}

/// Builds the ES document body for a participant.
fn build_document(participant: &Participant) -> Value {
    json!({
        "id": participant.id,
        "empId": participant.emp_id,
        "name": participant.name,
        "email": participant.email,
    })
}

/// Builds the search request body for a free-text query.
///
/// `query_string` syntax is passed through as-is, so callers can use
/// field-scoped queries like `name:alice` or bare terms.
fn build_search_body(query: &str) -> Value {
    json!({
        "query": {
            "query_string": {
                "query": query
            }
        }
    })
}

/// Parses participants out of a search response body, in hit order.
fn parse_search_hits(body: &Value) -> StorageResult<Vec<Participant>> {
    let hits = body
        .get("hits")
        .and_then(|h| h.get("hits"))
        .and_then(|h| h.as_array())
        .cloned()
        .unwrap_or_default();

    let mut participants = Vec::with_capacity(hits.len());
    for hit in &hits {
        let source = match hit.get("_source") {
            Some(s) => s,
            None => continue,
        };
        let participant: Participant = serde_json::from_value(source.clone())?;
        participants.push(participant);
    }
    Ok(participants)
}

#[async_trait]
impl ParticipantSearchRepository for ElasticsearchBackend {
    fn backend_name(&self) -> &'static str {
        "elasticsearch"
    }

    async fn index(&self, participant: &Participant) -> StorageResult<()> {
        let id = participant.id.ok_or(StorageError::Validation(
            ValidationError::MissingId,
        ))?;

        schema::ensure_index(self).await?;

        let index = self.index_name();
        let doc_id = Self::document_id(id);
        let doc = build_document(participant);

        let response = self
            .client()
            .index(IndexParts::IndexId(&index, &doc_id))
            .body(doc)
            .send()
            .await
            .map_err(|e| internal_error(format!("Failed to index participant {}: {}", id, e)))?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(internal_error(format!(
                "Failed to index participant {} (status {}): {}",
                id, status, body
            )));
        }

        tracing::debug!(id, index = %index, "Indexed participant");
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        let index = self.index_name();
        let doc_id = Self::document_id(id);

        let response = self
            .client()
            .delete(DeleteParts::IndexId(&index, &doc_id))
            .send()
            .await
            .map_err(|e| internal_error(format!("Failed to delete participant {}: {}", id, e)))?;

        let status = response.status_code();
        // 404 covers both a missing document and a missing index.
        if !status.is_success() && status.as_u16() != 404 {
            let body = response.text().await.unwrap_or_default();
            return Err(internal_error(format!(
                "Failed to delete participant {} (status {}): {}",
                id, status, body
            )));
        }

        tracing::debug!(id, index = %index, "Deleted participant from index");
        Ok(())
    }

    async fn search(&self, query: &str) -> StorageResult<Vec<Participant>> {
        let index = self.index_name();

        let response = self
            .client()
            .search(SearchParts::Index(&[&index]))
            .body(build_search_body(query))
            .send()
            .await
            .map_err(|e| internal_error(format!("Search failed: {}", e)))?;

        if !response.status_code().is_success() {
            let body = response.text().await.unwrap_or_default();
            // The index only appears after the first mirror write.
            if body.contains("index_not_found_exception") {
                return Ok(vec![]);
            }
            return Err(internal_error(format!("Search failed: {}", body)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| internal_error(format!("Failed to parse search response: {}", e)))?;

        parse_search_hits(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Participant {
        Participant {
            id: Some(7),
            emp_id: "E-100".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn test_document_uses_camel_case_fields() {
        let doc = build_document(&sample());
        assert_eq!(doc["id"], 7);
        assert_eq!(doc["empId"], "E-100");
        assert_eq!(doc["name"], "Alice");
        assert_eq!(doc["email"], "alice@example.com");
    }

    #[test]
    fn test_search_body_passes_query_through() {
        let body = build_search_body("name:alice AND E-100");
        assert_eq!(
            body["query"]["query_string"]["query"],
            "name:alice AND E-100"
        );
    }

    #[test]
    fn test_parse_hits_in_order() {
        let body = json!({
            "hits": {
                "total": { "value": 2 },
                "hits": [
                    { "_id": "7", "_source": {
                        "id": 7, "empId": "E-100",
                        "name": "Alice", "email": "alice@example.com"
                    }},
                    { "_id": "8", "_source": {
                        "id": 8, "empId": "E-101",
                        "name": "Bob", "email": "bob@example.com"
                    }}
                ]
            }
        });
        let participants = parse_search_hits(&body).unwrap();
        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0], sample());
        assert_eq!(participants[1].name, "Bob");
    }

    #[test]
    fn test_parse_hits_empty_response() {
        let body = json!({ "hits": { "total": { "value": 0 }, "hits": [] } });
        assert!(parse_search_hits(&body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_hits_skips_sourceless_hit() {
        let body = json!({
            "hits": {
                "hits": [
                    { "_id": "7" },
                    { "_id": "8", "_source": {
                        "id": 8, "empId": "E-101",
                        "name": "Bob", "email": "bob@example.com"
                    }}
                ]
            }
        });
        let participants = parse_search_hits(&body).unwrap();
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].id, Some(8));
    }
}
