//! Wire-level types for the neogate REST API.
//!
//! Entities are transient views of database state: every record is fetched
//! fresh per request, and identity is the database-assigned integer id.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON object holding node or relationship properties.
pub type Properties = Map<String, Value>;

// ── Records ───────────────────────────────────────────────────────

/// A node: database identity, label, and property map.
///
/// `created_at` / `updated_at` are stamped into `properties` by the server
/// on write, as RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: i64,
    pub label: String,
    pub properties: Properties,
}

/// A typed, directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub from_id: i64,
    pub to_id: i64,
    pub properties: Properties,
}

// ── Response envelopes ────────────────────────────────────────────

/// Envelope for node endpoints: always `{"node": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeResponse {
    pub node: NodeRecord,
}

/// Envelope for `POST /relationships`.
///
/// The key is omitted entirely when the create matched no endpoint nodes,
/// leaving the empty success body `{}` (see the endpoint contract).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationshipRecord>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database_connection: bool,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            database_connection: true,
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            status: "unhealthy".to_string(),
            database_connection: false,
        }
    }
}

/// Error body used by every non-2xx response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// ── Request bodies ────────────────────────────────────────────────

/// Body of `POST /relationships`.
///
/// The required fields are `Option` at the serde level so that handler
/// validation, not deserialization, produces the error message naming all
/// missing fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipRequest {
    pub from_id: Option<i64>,
    pub to_id: Option<i64>,
    #[serde(rename = "type")]
    pub rel_type: Option<String>,
    #[serde(default)]
    pub properties: Properties,
}

/// Body of `POST /query`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: Option<String>,
    #[serde(default)]
    pub params: Properties,
    /// Explicit transaction mode. When present it is authoritative;
    /// when absent the server falls back to keyword classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<QueryMode>,
}

/// Whether a query observes or mutates graph state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    Read,
    Write,
}
