//! Participant CRUD integration tests.
//!
//! Exercises the full request path: handler validation, primary-store writes,
//! and the mirror writes to the search index.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{create_test_server, participant_body};
use superleague_persistence::ParticipantStore;

// =============================================================================
// Create
// =============================================================================

mod create {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_201_with_fresh_id() {
        let (server, _store, _search) = create_test_server().await;

        let response = server
            .post("/participants")
            .json(&participant_body("EMP-001", "Ada Lovelace", "ada@example.com"))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert!(body["id"].as_i64().unwrap() > 0);
        assert_eq!(body["empId"], "EMP-001");
        assert_eq!(body["name"], "Ada Lovelace");
        assert_eq!(body["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn test_create_sets_location_header() {
        let (server, _store, _search) = create_test_server().await;

        let response = server
            .post("/participants")
            .json(&participant_body("EMP-001", "Ada Lovelace", "ada@example.com"))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        let id = body["id"].as_i64().unwrap();
        let location = response.header("location");
        assert!(
            location
                .to_str()
                .unwrap()
                .ends_with(&format!("/participants/{}", id))
        );
    }

    #[tokio::test]
    async fn test_create_with_id_returns_400_and_writes_nothing() {
        let (server, store, search) = create_test_server().await;

        let response = server
            .post("/participants")
            .json(&json!({
                "id": 1,
                "empId": "EMP-001",
                "name": "Ada Lovelace",
                "email": "ada@example.com"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "invalid");

        assert_eq!(store.count().await.unwrap(), 0);
        assert_eq!(search.index_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_missing_fields_returns_400() {
        let (server, store, _search) = create_test_server().await;

        let incomplete_bodies = [
            json!({"name": "Ada Lovelace", "email": "ada@example.com"}),
            json!({"empId": "EMP-001", "email": "ada@example.com"}),
            json!({"empId": "EMP-001", "name": "Ada Lovelace"}),
        ];

        for body in incomplete_bodies {
            let response = server.post("/participants").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
        }

        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_empty_field_returns_400() {
        let (server, store, _search) = create_test_server().await;

        let response = server
            .post("/participants")
            .json(&participant_body("", "Ada Lovelace", "ada@example.com"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_mirrors_to_search_index() {
        let (server, _store, search) = create_test_server().await;

        server
            .post("/participants")
            .json(&participant_body("EMP-001", "Ada Lovelace", "ada@example.com"))
            .await
            .assert_status(StatusCode::CREATED);

        assert_eq!(search.index_calls(), 1);
        assert_eq!(search.indexed_count(), 1);
    }

    #[tokio::test]
    async fn test_create_mirror_failure_returns_500() {
        let (server, store, search) = create_test_server().await;
        search.fail_writes();

        let response = server
            .post("/participants")
            .json(&participant_body("EMP-001", "Ada Lovelace", "ada@example.com"))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        // Dual-write is best-effort: the primary write has already committed.
        assert_eq!(store.count().await.unwrap(), 1);
    }
}

// =============================================================================
// Read / List
// =============================================================================

mod read {
    use super::*;

    #[tokio::test]
    async fn test_read_round_trip() {
        let (server, _store, _search) = create_test_server().await;

        let created: Value = server
            .post("/participants")
            .json(&participant_body("EMP-001", "Ada Lovelace", "ada@example.com"))
            .await
            .json();
        let id = created["id"].as_i64().unwrap();

        let response = server.get(&format!("/participants/{}", id)).await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body, created);
    }

    #[tokio::test]
    async fn test_read_unknown_id_returns_404() {
        let (server, _store, _search) = create_test_server().await;

        let response = server.get("/participants/999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "not-found");
    }

    #[tokio::test]
    async fn test_list_empty_returns_empty_array() {
        let (server, _store, _search) = create_test_server().await;

        let response = server.get("/participants").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_list_returns_all_in_id_order() {
        let (server, _store, _search) = create_test_server().await;

        for (emp_id, name) in [("EMP-001", "Ada"), ("EMP-002", "Grace"), ("EMP-003", "Edsger")]
        {
            server
                .post("/participants")
                .json(&participant_body(emp_id, name, "p@example.com"))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server.get("/participants").await;
        response.assert_status(StatusCode::OK);

        let body: Value = response.json();
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 3);
        let ids: Vec<i64> = items.iter().map(|p| p["id"].as_i64().unwrap()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}

// =============================================================================
// Update
// =============================================================================

mod update {
    use super::*;

    #[tokio::test]
    async fn test_update_returns_200_with_new_fields() {
        let (server, _store, _search) = create_test_server().await;

        let created: Value = server
            .post("/participants")
            .json(&participant_body("EMP-001", "Ada Lovelace", "ada@example.com"))
            .await
            .json();
        let id = created["id"].as_i64().unwrap();

        let response = server
            .put("/participants")
            .json(&json!({
                "id": id,
                "empId": "EMP-001",
                "name": "Ada King",
                "email": "ada.king@example.com"
            }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["id"], id);
        assert_eq!(body["name"], "Ada King");

        let fetched: Value = server.get(&format!("/participants/{}", id)).await.json();
        assert_eq!(fetched["name"], "Ada King");
    }

    #[tokio::test]
    async fn test_update_without_id_returns_400() {
        let (server, _store, _search) = create_test_server().await;

        let response = server
            .put("/participants")
            .json(&participant_body("EMP-001", "Ada Lovelace", "ada@example.com"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["message"], "Invalid id");
    }

    #[tokio::test]
    async fn test_update_unknown_id_upserts() {
        let (server, store, _search) = create_test_server().await;

        let response = server
            .put("/participants")
            .json(&json!({
                "id": 77,
                "empId": "EMP-077",
                "name": "Grace Hopper",
                "email": "grace@example.com"
            }))
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(
            store.find_by_id(77).await.unwrap().unwrap().name,
            "Grace Hopper"
        );
    }
}

// =============================================================================
// Delete
// =============================================================================

mod delete {
    use super::*;

    #[tokio::test]
    async fn test_delete_returns_204() {
        let (server, store, _search) = create_test_server().await;

        let created: Value = server
            .post("/participants")
            .json(&participant_body("EMP-001", "Ada Lovelace", "ada@example.com"))
            .await
            .json();
        let id = created["id"].as_i64().unwrap();

        let response = server.delete(&format!("/participants/{}", id)).await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_204() {
        let (server, store, _search) = create_test_server().await;

        server
            .post("/participants")
            .json(&participant_body("EMP-001", "Ada Lovelace", "ada@example.com"))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.delete("/participants/999").await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}

// =============================================================================
// Mirror-write accounting
// =============================================================================

mod mirror {
    use super::*;

    #[tokio::test]
    async fn test_exactly_one_mirror_call_per_mutation() {
        let (server, _store, search) = create_test_server().await;

        let created: Value = server
            .post("/participants")
            .json(&participant_body("EMP-001", "Ada Lovelace", "ada@example.com"))
            .await
            .json();
        let id = created["id"].as_i64().unwrap();
        assert_eq!(search.index_calls(), 1);
        assert_eq!(search.delete_calls(), 0);

        server
            .put("/participants")
            .json(&json!({
                "id": id,
                "empId": "EMP-001",
                "name": "Ada King",
                "email": "ada@example.com"
            }))
            .await
            .assert_status(StatusCode::OK);
        assert_eq!(search.index_calls(), 2);
        assert_eq!(search.delete_calls(), 0);

        server
            .delete(&format!("/participants/{}", id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        assert_eq!(search.index_calls(), 2);
        assert_eq!(search.delete_calls(), 1);
        assert_eq!(search.indexed_count(), 0);
    }
}
