//! Read operations and custom-query routing.

use neo4rs::query;
use serde_json::Value;

use neogate_core::{NodeRecord, Properties, QueryMode};

use crate::client::{GraphClient, GraphError};
use crate::convert::{bind_params, node_to_record, row_to_json};

impl GraphClient {
    /// Get a node by its database-assigned identity.
    pub async fn get_node_by_id(&self, id: i64) -> Result<Option<NodeRecord>, GraphError> {
        let q = query(
            "MATCH (n)
             WHERE id(n) = $id
             RETURN n",
        )
        .param("id", id);

        match self.query_one(q).await? {
            Some(row) => {
                let node: neo4rs::Node = row
                    .get("n")
                    .map_err(|e| GraphError::Serialization(format!("failed to read node: {e}")))?;
                Ok(Some(node_to_record(&node)?))
            }
            None => Ok(None),
        }
    }

    /// Execute an arbitrary Cypher query with named parameters, returning
    /// the ordered result rows as JSON objects keyed by return column.
    ///
    /// An explicit `mode` is authoritative. Without one, the query is
    /// classified by its leading keyword, a documented heuristic: a write
    /// expressed through any other keyword (`REMOVE`, `FOREACH`, ...) is
    /// routed as a read, and a read that merely starts with one of the
    /// write keywords is routed as a write.
    pub async fn run_custom_query(
        &self,
        cypher: &str,
        params: &Properties,
        mode: Option<QueryMode>,
    ) -> Result<Vec<Value>, GraphError> {
        let mode = mode.unwrap_or_else(|| infer_mode(cypher));
        let q = bind_params(query(cypher), params)?;

        let rows = match mode {
            QueryMode::Read => self.query_rows(q).await?,
            QueryMode::Write => self.write_rows(q).await?,
        };

        rows.iter().map(row_to_json).collect()
    }
}

/// Classify a query as read or write by its leading keyword.
fn infer_mode(cypher: &str) -> QueryMode {
    const WRITE_KEYWORDS: [&str; 4] = ["CREATE", "DELETE", "MERGE", "SET"];

    let head = cypher.trim_start().to_uppercase();
    if WRITE_KEYWORDS.iter().any(|kw| head.starts_with(kw)) {
        QueryMode::Write
    } else {
        QueryMode::Read
    }
}
