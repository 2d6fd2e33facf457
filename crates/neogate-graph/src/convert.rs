//! Value and structure conversion between JSON and Bolt.
//!
//! All `neo4rs` value access is isolated to this module so the rest of the
//! crate works in terms of `serde_json` values and wire records.

use neo4rs::{BoltBoolean, BoltFloat, BoltInteger, BoltList, BoltMap, BoltNull, BoltType, Query};
use serde_json::Value;

use neogate_core::{NodeRecord, Properties, RelationshipRecord};

use crate::client::GraphError;

// ── JSON → Bolt ──────────────────────────────────────────────────

/// Convert a JSON value into a Bolt parameter value.
///
/// Nested objects are rejected: Neo4j properties hold scalars and arrays
/// only, and this facade does not assume server-side plugins to unpack
/// maps.
pub(crate) fn json_to_bolt(value: &Value) -> Result<BoltType, GraphError> {
    match value {
        Value::Null => Ok(BoltType::Null(BoltNull)),
        Value::Bool(b) => Ok(BoltType::Boolean(BoltBoolean::new(*b))),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(BoltType::Integer(BoltInteger::new(i)))
            } else if let Some(f) = n.as_f64() {
                Ok(BoltType::Float(BoltFloat::new(f)))
            } else {
                Err(GraphError::Serialization(format!(
                    "number out of range for Bolt: {n}"
                )))
            }
        }
        Value::String(s) => Ok(BoltType::String(s.as_str().into())),
        Value::Array(items) => {
            let mut list = BoltList::default();
            for item in items {
                list.push(json_to_bolt(item)?);
            }
            Ok(BoltType::List(list))
        }
        Value::Object(_) => Err(GraphError::Serialization(
            "nested objects are not valid property values".to_string(),
        )),
    }
}

/// Convert a JSON object into a Bolt map parameter.
pub(crate) fn json_map_to_bolt(map: &Properties) -> Result<BoltMap, GraphError> {
    let mut out = BoltMap::default();
    for (key, value) in map {
        out.put(key.as_str().into(), json_to_bolt(value)?);
    }
    Ok(out)
}

/// Bind each entry of a JSON object as a named query parameter.
pub(crate) fn bind_params(mut query: Query, params: &Properties) -> Result<Query, GraphError> {
    for (key, value) in params {
        query = query.param(key, json_to_bolt(value)?);
    }
    Ok(query)
}

// ── Bolt → JSON ──────────────────────────────────────────────────

/// Convert a result row into a JSON object keyed by return column.
///
/// Nodes and relationships flatten to their property maps, matching what
/// callers of the custom-query endpoint see on the wire.
pub(crate) fn row_to_json(row: &neo4rs::Row) -> Result<Value, GraphError> {
    row.to::<Value>()
        .map_err(|e| GraphError::Serialization(format!("failed to convert row: {e}")))
}

/// Convert a `neo4rs` node into a wire record.
pub(crate) fn node_to_record(node: &neo4rs::Node) -> Result<NodeRecord, GraphError> {
    let mut properties = Properties::new();
    for key in node.keys() {
        let value: Value = node
            .get(key)
            .map_err(|e| GraphError::Serialization(format!("node property {key:?}: {e}")))?;
        properties.insert(key.to_string(), value);
    }

    let label = node
        .labels()
        .first()
        .map(|l| l.to_string())
        .unwrap_or_default();

    Ok(NodeRecord {
        id: node.id(),
        label,
        properties,
    })
}

/// Convert a `neo4rs` relationship into a wire record.
pub(crate) fn relation_to_record(rel: &neo4rs::Relation) -> Result<RelationshipRecord, GraphError> {
    let mut properties = Properties::new();
    for key in rel.keys() {
        let value: Value = rel
            .get(key)
            .map_err(|e| GraphError::Serialization(format!("relationship property {key:?}: {e}")))?;
        properties.insert(key.to_string(), value);
    }

    Ok(RelationshipRecord {
        id: rel.id(),
        rel_type: rel.typ().to_string(),
        from_id: rel.start_node_id(),
        to_id: rel.end_node_id(),
        properties,
    })
}

// ── Identifier validation ────────────────────────────────────────

/// Validate a label or relationship type before it is spliced into Cypher.
///
/// Cypher cannot bind identifiers as parameters, so anything outside
/// `[A-Za-z_][A-Za-z0-9_]*` is rejected up front.
pub(crate) fn validate_identifier(ident: &str) -> Result<(), GraphError> {
    let mut chars = ident.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(GraphError::InvalidIdentifier(ident.to_string()))
    }
}
