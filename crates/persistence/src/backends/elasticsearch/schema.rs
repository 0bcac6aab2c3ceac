//! Elasticsearch index mapping for participants.

use elasticsearch::indices::{IndicesCreateParts, IndicesExistsParts};
use serde_json::json;

use crate::error::{BackendError, StorageError, StorageResult};

use super::backend::{ElasticsearchBackend, ElasticsearchConfig};

/// Creates the index mapping for participant documents.
///
/// The text fields carry a `keyword` sub-field so exact matching stays
/// possible alongside the analyzed full-text search.
pub fn create_index_mapping(config: &ElasticsearchConfig) -> serde_json::Value {
    json!({
        "settings": {
            "number_of_shards": config.number_of_shards,
            "number_of_replicas": config.number_of_replicas,
            "refresh_interval": config.refresh_interval
        },
        "mappings": {
            "properties": {
                "id": { "type": "long" },
                "empId": {
                    "type": "text",
                    "analyzer": "standard",
                    "fields": {
                        "keyword": { "type": "keyword" }
                    }
                },
                "name": {
                    "type": "text",
                    "analyzer": "standard",
                    "fields": {
                        "keyword": { "type": "keyword" }
                    }
                },
                "email": {
                    "type": "text",
                    "analyzer": "standard",
                    "fields": {
                        "keyword": { "type": "keyword" }
                    }
                }
            }
        }
    })
}

/// Ensures the participant index exists, creating it with the mapping if not.
pub async fn ensure_index(backend: &ElasticsearchBackend) -> StorageResult<()> {
    let index = backend.index_name();

    let exists = backend
        .client()
        .indices()
        .exists(IndicesExistsParts::Index(&[&index]))
        .send()
        .await
        .map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "elasticsearch".to_string(),
                message: format!("Failed to check index existence: {}", e),
            })
        })?;

    if exists.status_code().is_success() {
        return Ok(());
    }

    let mapping = create_index_mapping(backend.config());

    let response = backend
        .client()
        .indices()
        .create(IndicesCreateParts::Index(&index))
        .body(mapping)
        .send()
        .await
        .map_err(|e| {
            StorageError::Backend(BackendError::Internal {
                backend_name: "elasticsearch".to_string(),
                message: format!("Failed to create index {}: {}", index, e),
                source: None,
            })
        })?;

    let status = response.status_code();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        // A concurrent creator is fine.
        if body.contains("resource_already_exists_exception") {
            return Ok(());
        }
        return Err(StorageError::Backend(BackendError::Internal {
            backend_name: "elasticsearch".to_string(),
            message: format!("Failed to create index {} (status {}): {}", index, status, body),
            source: None,
        }));
    }

    Ok(())
}
