//! The service-facing trait over the adapter.
//!
//! Handlers are generic over [`GraphStore`] so the HTTP layer can be
//! exercised against a mock without a live database.

use async_trait::async_trait;
use serde_json::Value;

use neogate_core::{NodeRecord, Properties, QueryMode, RelationshipRecord};

use crate::client::{GraphClient, GraphError};

/// Connectivity probe plus the six domain operations.
#[async_trait]
pub trait GraphStore: Send + Sync + 'static {
    /// Liveness probe; never errors.
    async fn verify_connectivity(&self) -> bool;

    /// Create a node; returns it with its assigned identity.
    async fn create_node(
        &self,
        label: &str,
        properties: &Properties,
    ) -> Result<NodeRecord, GraphError>;

    /// Fetch a node by identity.
    async fn get_node_by_id(&self, id: i64) -> Result<Option<NodeRecord>, GraphError>;

    /// Merge properties into a node; `None` when absent.
    async fn update_node(
        &self,
        id: i64,
        properties: &Properties,
    ) -> Result<Option<NodeRecord>, GraphError>;

    /// Detach-delete a node; `true` iff something was deleted.
    async fn delete_node(&self, id: i64) -> Result<bool, GraphError>;

    /// Create a relationship; `None` when either endpoint is absent.
    async fn create_relationship(
        &self,
        from_id: i64,
        to_id: i64,
        rel_type: &str,
        properties: &Properties,
    ) -> Result<Option<RelationshipRecord>, GraphError>;

    /// Execute an arbitrary query in the requested (or inferred) mode.
    async fn run_custom_query(
        &self,
        cypher: &str,
        params: &Properties,
        mode: Option<QueryMode>,
    ) -> Result<Vec<Value>, GraphError>;
}

#[async_trait]
impl GraphStore for GraphClient {
    async fn verify_connectivity(&self) -> bool {
        GraphClient::verify_connectivity(self).await
    }

    async fn create_node(
        &self,
        label: &str,
        properties: &Properties,
    ) -> Result<NodeRecord, GraphError> {
        GraphClient::create_node(self, label, properties).await
    }

    async fn get_node_by_id(&self, id: i64) -> Result<Option<NodeRecord>, GraphError> {
        GraphClient::get_node_by_id(self, id).await
    }

    async fn update_node(
        &self,
        id: i64,
        properties: &Properties,
    ) -> Result<Option<NodeRecord>, GraphError> {
        GraphClient::update_node(self, id, properties).await
    }

    async fn delete_node(&self, id: i64) -> Result<bool, GraphError> {
        GraphClient::delete_node(self, id).await
    }

    async fn create_relationship(
        &self,
        from_id: i64,
        to_id: i64,
        rel_type: &str,
        properties: &Properties,
    ) -> Result<Option<RelationshipRecord>, GraphError> {
        GraphClient::create_relationship(self, from_id, to_id, rel_type, properties).await
    }

    async fn run_custom_query(
        &self,
        cypher: &str,
        params: &Properties,
        mode: Option<QueryMode>,
    ) -> Result<Vec<Value>, GraphError> {
        GraphClient::run_custom_query(self, cypher, params, mode).await
    }
}
