//! Write operations: the Cypher templates that mutate graph state.
//!
//! Every statement runs through [`GraphClient::write_rows`] so that writes
//! happen inside an explicit transaction. Timestamps are stamped here as
//! RFC 3339 strings, so records round-trip as plain JSON.

use chrono::Utc;
use neo4rs::{query, BoltType};

use neogate_core::{NodeRecord, Properties, RelationshipRecord};

use crate::client::{GraphClient, GraphError};
use crate::convert::{json_map_to_bolt, node_to_record, relation_to_record, validate_identifier};

impl GraphClient {
    /// Create a node with the given label and properties, stamping
    /// `created_at`. Returns the created node with its assigned identity.
    pub async fn create_node(
        &self,
        label: &str,
        properties: &Properties,
    ) -> Result<NodeRecord, GraphError> {
        validate_identifier(label)?;

        let cypher = format!(
            "CREATE (n:{label} $props)
             SET n.created_at = $now
             RETURN n"
        );

        let q = query(&cypher)
            .param("props", BoltType::Map(json_map_to_bolt(properties)?))
            .param("now", Utc::now().to_rfc3339());

        let rows = self.write_rows(q).await?;
        let row = rows.first().ok_or_else(|| {
            GraphError::Serialization("CREATE returned no row".to_string())
        })?;
        let node: neo4rs::Node = row
            .get("n")
            .map_err(|e| GraphError::Serialization(format!("failed to read created node: {e}")))?;
        node_to_record(&node)
    }

    /// Merge properties into a node matched by identity, stamping
    /// `updated_at`. Same-named keys are overwritten, the rest are kept.
    /// Returns `None` when no node has that identity.
    pub async fn update_node(
        &self,
        id: i64,
        properties: &Properties,
    ) -> Result<Option<NodeRecord>, GraphError> {
        let q = query(
            "MATCH (n)
             WHERE id(n) = $id
             SET n += $props,
                 n.updated_at = $now
             RETURN n",
        )
        .param("id", id)
        .param("props", BoltType::Map(json_map_to_bolt(properties)?))
        .param("now", Utc::now().to_rfc3339());

        let rows = self.write_rows(q).await?;
        match rows.first() {
            Some(row) => {
                let node: neo4rs::Node = row.get("n").map_err(|e| {
                    GraphError::Serialization(format!("failed to read updated node: {e}"))
                })?;
                Ok(Some(node_to_record(&node)?))
            }
            None => Ok(None),
        }
    }

    /// Detach-delete a node by identity. Returns `true` iff something was
    /// deleted.
    pub async fn delete_node(&self, id: i64) -> Result<bool, GraphError> {
        let q = query(
            "MATCH (n)
             WHERE id(n) = $id
             DETACH DELETE n
             RETURN count(n) AS deleted",
        )
        .param("id", id);

        let rows = self.write_rows(q).await?;
        match rows.first() {
            Some(row) => Ok(row.get::<i64>("deleted").unwrap_or(0) > 0),
            None => Ok(false),
        }
    }

    /// Create a typed relationship between two nodes matched by identity,
    /// stamping `created_at`.
    ///
    /// Returns `None` when either endpoint does not exist: the MATCH simply
    /// yields nothing, so nothing is created and no error is raised.
    pub async fn create_relationship(
        &self,
        from_id: i64,
        to_id: i64,
        rel_type: &str,
        properties: &Properties,
    ) -> Result<Option<RelationshipRecord>, GraphError> {
        validate_identifier(rel_type)?;

        let cypher = format!(
            "MATCH (a), (b)
             WHERE id(a) = $from_id AND id(b) = $to_id
             CREATE (a)-[r:{rel_type} $props]->(b)
             SET r.created_at = $now
             RETURN r"
        );

        let q = query(&cypher)
            .param("from_id", from_id)
            .param("to_id", to_id)
            .param("props", BoltType::Map(json_map_to_bolt(properties)?))
            .param("now", Utc::now().to_rfc3339());

        let rows = self.write_rows(q).await?;
        match rows.first() {
            Some(row) => {
                let rel: neo4rs::Relation = row.get("r").map_err(|e| {
                    GraphError::Serialization(format!("failed to read created relationship: {e}"))
                })?;
                Ok(Some(relation_to_record(&rel)?))
            }
            None => Ok(None),
        }
    }
}
