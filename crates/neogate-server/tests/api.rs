//! Endpoint tests: the real router wired to an in-memory mock store.
//!
//! These cover the full endpoint contract table — status codes, envelope
//! shapes, and error bodies — without a live Neo4j.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use neogate_core::{NodeRecord, Properties, QueryMode, RelationshipRecord};
use neogate_graph::{GraphError, GraphStore};
use neogate_server::routes::create_router;
use neogate_server::state::AppState;

// ── Mock store ───────────────────────────────────────────────────

#[derive(Default)]
struct MockStore {
    connected: bool,
    fail: bool,
    nodes: Mutex<HashMap<i64, NodeRecord>>,
    next_id: AtomicI64,
    last_query: Mutex<Option<(String, Option<QueryMode>)>>,
}

impl MockStore {
    fn healthy() -> Self {
        Self {
            connected: true,
            ..Default::default()
        }
    }

    fn failing() -> Self {
        Self {
            connected: true,
            fail: true,
            ..Default::default()
        }
    }

    fn check_failure(&self) -> Result<(), GraphError> {
        if self.fail {
            Err(GraphError::Connection("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GraphStore for MockStore {
    async fn verify_connectivity(&self) -> bool {
        self.connected
    }

    async fn create_node(
        &self,
        label: &str,
        properties: &Properties,
    ) -> Result<NodeRecord, GraphError> {
        self.check_failure()?;
        // Same contract as the real adapter: the label is validated
        // before any statement is built.
        let mut chars = label.chars();
        let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(GraphError::InvalidIdentifier(label.to_string()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut properties = properties.clone();
        properties.insert("created_at".to_string(), json!("2026-08-07T00:00:00Z"));
        let node = NodeRecord {
            id,
            label: label.to_string(),
            properties,
        };
        self.nodes.lock().unwrap().insert(id, node.clone());
        Ok(node)
    }

    async fn get_node_by_id(&self, id: i64) -> Result<Option<NodeRecord>, GraphError> {
        self.check_failure()?;
        Ok(self.nodes.lock().unwrap().get(&id).cloned())
    }

    async fn update_node(
        &self,
        id: i64,
        properties: &Properties,
    ) -> Result<Option<NodeRecord>, GraphError> {
        self.check_failure()?;
        let mut nodes = self.nodes.lock().unwrap();
        Ok(nodes.get_mut(&id).map(|node| {
            for (key, value) in properties {
                node.properties.insert(key.clone(), value.clone());
            }
            node.properties
                .insert("updated_at".to_string(), json!("2026-08-07T00:00:01Z"));
            node.clone()
        }))
    }

    async fn delete_node(&self, id: i64) -> Result<bool, GraphError> {
        self.check_failure()?;
        Ok(self.nodes.lock().unwrap().remove(&id).is_some())
    }

    async fn create_relationship(
        &self,
        from_id: i64,
        to_id: i64,
        rel_type: &str,
        properties: &Properties,
    ) -> Result<Option<RelationshipRecord>, GraphError> {
        self.check_failure()?;
        let nodes = self.nodes.lock().unwrap();
        if !nodes.contains_key(&from_id) || !nodes.contains_key(&to_id) {
            return Ok(None);
        }
        let mut properties = properties.clone();
        properties.insert("created_at".to_string(), json!("2026-08-07T00:00:00Z"));
        Ok(Some(RelationshipRecord {
            id: 1000,
            rel_type: rel_type.to_string(),
            from_id,
            to_id,
            properties,
        }))
    }

    async fn run_custom_query(
        &self,
        cypher: &str,
        _params: &Properties,
        mode: Option<QueryMode>,
    ) -> Result<Vec<Value>, GraphError> {
        self.check_failure()?;
        *self.last_query.lock().unwrap() = Some((cypher.to_string(), mode));
        Ok(vec![json!({"result": 1})])
    }
}

// ── Helpers ──────────────────────────────────────────────────────

fn router(store: MockStore) -> axum::Router {
    create_router(AppState::new(store))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

/// Seed a node and return its id.
async fn seed_node(store: &MockStore) -> i64 {
    let mut props = Properties::new();
    props.insert("name".to_string(), json!("Alice Smith"));
    props.insert("age".to_string(), json!(32));
    store.create_node("Person", &props).await.unwrap().id
}

// ── Health ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_ok() {
    let (status, body) = send_json(
        router(MockStore::healthy()),
        empty_request("GET", "/health"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "database_connection": true}));
}

#[tokio::test]
async fn test_health_unavailable() {
    let (status, body) = send_json(
        router(MockStore::default()),
        empty_request("GET", "/health"),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({"status": "unhealthy", "database_connection": false})
    );
}

// ── Node create ──────────────────────────────────────────────────

#[tokio::test]
async fn test_create_node() {
    let (status, body) = send_json(
        router(MockStore::healthy()),
        json_request(
            "POST",
            "/nodes/Person",
            json!({"name": "Alice Smith", "age": 32, "occupation": "Software Engineer"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let node = &body["node"];
    assert!(node["id"].is_i64());
    assert_eq!(node["label"], "Person");
    assert_eq!(node["properties"]["name"], "Alice Smith");
    assert_eq!(node["properties"]["age"], 32);
    assert!(node["properties"]["created_at"].is_string());
}

#[tokio::test]
async fn test_create_node_empty_body_is_400() {
    let (status, body) = send_json(
        router(MockStore::healthy()),
        json_request("POST", "/nodes/Person", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No data provided"}));
}

#[tokio::test]
async fn test_create_node_missing_body_is_400() {
    let (status, body) = send_json(
        router(MockStore::healthy()),
        empty_request("POST", "/nodes/Person"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No data provided"}));
}

#[tokio::test]
async fn test_create_node_invalid_label_is_400() {
    let (status, body) = send_json(
        router(MockStore::healthy()),
        json_request("POST", "/nodes/Person%29%20DETACH", json!({"name": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid identifier"));
}

// ── Node get ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_node() {
    let store = MockStore::healthy();
    let id = seed_node(&store).await;

    let (status, body) = send_json(
        router(store),
        empty_request("GET", &format!("/nodes/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["node"]["id"], id);
    assert_eq!(body["node"]["properties"]["name"], "Alice Smith");
}

#[tokio::test]
async fn test_get_missing_node_is_404() {
    let (status, body) = send_json(
        router(MockStore::healthy()),
        empty_request("GET", "/nodes/9999"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Node not found"}));
}

#[tokio::test]
async fn test_get_node_with_non_numeric_id_is_400() {
    let (status, body) = send_json(
        router(MockStore::healthy()),
        empty_request("GET", "/nodes/abc"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid node id"));
}

// ── Node update ──────────────────────────────────────────────────

#[tokio::test]
async fn test_update_node_merges_properties() {
    let store = MockStore::healthy();
    let id = seed_node(&store).await;

    let (status, body) = send_json(
        router(store),
        json_request(
            "PUT",
            &format!("/nodes/{id}"),
            json!({"age": 33, "skills": ["Python", "Neo4j", "Docker"]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let props = &body["node"]["properties"];
    assert_eq!(props["age"], 33);
    assert_eq!(props["name"], "Alice Smith");
    assert_eq!(props["skills"], json!(["Python", "Neo4j", "Docker"]));
    assert!(props["updated_at"].is_string());
}

#[tokio::test]
async fn test_update_missing_node_is_404() {
    let (status, _) = send_json(
        router(MockStore::healthy()),
        json_request("PUT", "/nodes/9999", json!({"age": 33})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_node_empty_body_is_400() {
    let store = MockStore::healthy();
    let id = seed_node(&store).await;

    let (status, body) = send_json(
        router(store),
        json_request("PUT", &format!("/nodes/{id}"), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No data provided"}));
}

// ── Node delete ──────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_node_is_204_with_empty_body() {
    let store = MockStore::healthy();
    let id = seed_node(&store).await;

    let (status, bytes) = send(
        router(store),
        empty_request("DELETE", &format!("/nodes/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_delete_missing_node_is_404() {
    let (status, body) = send_json(
        router(MockStore::healthy()),
        empty_request("DELETE", "/nodes/9999"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Node not found"}));
}

// ── Relationships ────────────────────────────────────────────────

#[tokio::test]
async fn test_create_relationship() {
    let store = MockStore::healthy();
    let from = seed_node(&store).await;
    let to = seed_node(&store).await;

    let (status, body) = send_json(
        router(store),
        json_request(
            "POST",
            "/relationships",
            json!({
                "from_id": from,
                "to_id": to,
                "type": "WORKS_AT",
                "properties": {"role": "Senior Developer", "since": 2018, "salary": 120000}
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let rel = &body["relationship"];
    assert_eq!(rel["type"], "WORKS_AT");
    assert_eq!(rel["from_id"], from);
    assert_eq!(rel["to_id"], to);
    assert_eq!(rel["properties"]["role"], "Senior Developer");
    assert!(rel["properties"]["created_at"].is_string());
}

#[tokio::test]
async fn test_relationship_with_missing_endpoint_is_silent_success() {
    // Deliberate asymmetry: a dead endpoint is not a 404. The MATCH
    // yields nothing, so the create succeeds with an empty body.
    let store = MockStore::healthy();
    let from = seed_node(&store).await;

    let (status, body) = send_json(
        router(store),
        json_request(
            "POST",
            "/relationships",
            json!({"from_id": from, "to_id": 9999, "type": "WORKS_AT"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_relationship_missing_field_is_400_naming_all_fields() {
    let (status, body) = send_json(
        router(MockStore::healthy()),
        json_request(
            "POST",
            "/relationships",
            json!({"from_id": 1, "to_id": 2}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    for field in ["from_id", "to_id", "type"] {
        assert!(message.contains(field), "{message:?} should name {field}");
    }
}

// ── Cypher ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_cypher_returns_rows() {
    let (status, body) = send_json(
        router(MockStore::healthy()),
        json_request(
            "POST",
            "/cypher",
            json!({"query": "MATCH (n) RETURN n", "params": {}}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"result": 1}]));
}

#[tokio::test]
async fn test_cypher_without_query_is_400() {
    let (status, body) = send_json(
        router(MockStore::healthy()),
        json_request("POST", "/cypher", json!({"params": {}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Query required"}));
}

#[tokio::test]
async fn test_cypher_passes_explicit_mode_through() {
    let state = AppState::new(MockStore::healthy());
    let store = Arc::clone(&state.store);
    let app = create_router(state);

    let (status, _) = send_json(
        app.clone(),
        json_request(
            "POST",
            "/cypher",
            json!({"query": "MATCH (n) SET n.x = 1", "mode": "write"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (cypher, mode) = store.last_query.lock().unwrap().clone().unwrap();
    assert_eq!(cypher, "MATCH (n) SET n.x = 1");
    assert_eq!(mode, Some(QueryMode::Write));

    // Without a mode the handler forwards None; classification is the
    // adapter's job, not the HTTP layer's.
    let (status, _) = send_json(
        app,
        json_request("POST", "/cypher", json!({"query": "REMOVE n.age"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, mode) = store.last_query.lock().unwrap().clone().unwrap();
    assert_eq!(mode, None);
}

// ── Adapter failures ─────────────────────────────────────────────

#[tokio::test]
async fn test_adapter_error_surfaces_as_500_with_message() {
    let (status, body) = send_json(
        router(MockStore::failing()),
        empty_request("GET", "/nodes/1"),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Neo4j connection error: connection refused"})
    );
}

#[tokio::test]
async fn test_adapter_error_on_create_surfaces_as_500() {
    let (status, body) = send_json(
        router(MockStore::failing()),
        json_request("POST", "/nodes/Person", json!({"name": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("connection refused"));
}
