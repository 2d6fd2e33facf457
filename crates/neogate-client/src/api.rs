//! HTTP client for the neogate API.
//!
//! The server schema is pinned (`{"node": ...}`, `{"relationship": ...}`),
//! so identities are read directly from the envelope; there is no
//! shape-guessing here.

use serde_json::Value;

use neogate_core::{
    HealthResponse, NodeRecord, NodeResponse, Properties, QueryMode, QueryRequest,
    RelationshipRecord, RelationshipRequest, RelationshipResponse,
};

/// Errors from client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("expected status {expected:?}, got {got}: {body}")]
    UnexpectedStatus {
        expected: Vec<u16>,
        got: u16,
        body: String,
    },
}

/// Client for one neogate server.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /health`; errors unless the server answers 200.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let resp = self.http.get(self.url("/health")).send().await?;
        let resp = expect_status(resp, &[200]).await?;
        Ok(resp.json().await?)
    }

    /// `POST /nodes/{label}`; expects 201.
    pub async fn create_node(
        &self,
        label: &str,
        properties: &Properties,
    ) -> Result<NodeRecord, ClientError> {
        tracing::info!(label, "Creating node");
        let resp = self
            .http
            .post(self.url(&format!("/nodes/{label}")))
            .json(properties)
            .send()
            .await?;
        let resp = expect_status(resp, &[201]).await?;
        let body: NodeResponse = resp.json().await?;
        Ok(body.node)
    }

    /// `GET /nodes/{id}`; expects 200.
    pub async fn get_node(&self, id: i64) -> Result<NodeRecord, ClientError> {
        tracing::info!(id, "Getting node");
        let resp = self
            .http
            .get(self.url(&format!("/nodes/{id}")))
            .send()
            .await?;
        let resp = expect_status(resp, &[200]).await?;
        let body: NodeResponse = resp.json().await?;
        Ok(body.node)
    }

    /// `GET /nodes/{id}`, treating 404 as `None`.
    pub async fn try_get_node(&self, id: i64) -> Result<Option<NodeRecord>, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/nodes/{id}")))
            .send()
            .await?;
        if resp.status().as_u16() == 404 {
            return Ok(None);
        }
        let resp = expect_status(resp, &[200]).await?;
        let body: NodeResponse = resp.json().await?;
        Ok(Some(body.node))
    }

    /// `PUT /nodes/{id}`; expects 200.
    pub async fn update_node(
        &self,
        id: i64,
        properties: &Properties,
    ) -> Result<NodeRecord, ClientError> {
        tracing::info!(id, "Updating node");
        let resp = self
            .http
            .put(self.url(&format!("/nodes/{id}")))
            .json(properties)
            .send()
            .await?;
        let resp = expect_status(resp, &[200]).await?;
        let body: NodeResponse = resp.json().await?;
        Ok(body.node)
    }

    /// `DELETE /nodes/{id}`; expects 204.
    pub async fn delete_node(&self, id: i64) -> Result<(), ClientError> {
        tracing::info!(id, "Deleting node");
        let resp = self
            .http
            .delete(self.url(&format!("/nodes/{id}")))
            .send()
            .await?;
        expect_status(resp, &[204]).await?;
        Ok(())
    }

    /// `POST /relationships`; expects 201.
    ///
    /// `None` means the server reported the documented empty success:
    /// one of the endpoint nodes did not exist, nothing was created.
    pub async fn create_relationship(
        &self,
        from_id: i64,
        to_id: i64,
        rel_type: &str,
        properties: &Properties,
    ) -> Result<Option<RelationshipRecord>, ClientError> {
        tracing::info!(from_id, to_id, rel_type, "Creating relationship");
        let request = RelationshipRequest {
            from_id: Some(from_id),
            to_id: Some(to_id),
            rel_type: Some(rel_type.to_string()),
            properties: properties.clone(),
        };
        let resp = self
            .http
            .post(self.url("/relationships"))
            .json(&request)
            .send()
            .await?;
        let resp = expect_status(resp, &[201]).await?;
        let body: RelationshipResponse = resp.json().await?;
        Ok(body.relationship)
    }

    /// `POST /cypher`; expects 200. Returns the ordered result rows.
    pub async fn run_cypher(
        &self,
        query: &str,
        params: &Properties,
        mode: Option<QueryMode>,
    ) -> Result<Vec<Value>, ClientError> {
        tracing::info!(query, "Running Cypher query");
        let request = QueryRequest {
            query: Some(query.to_string()),
            params: params.clone(),
            mode,
        };
        let resp = self
            .http
            .post(self.url("/cypher"))
            .json(&request)
            .send()
            .await?;
        let resp = expect_status(resp, &[200]).await?;
        Ok(resp.json().await?)
    }
}

/// Validate the response status against an expected set.
async fn expect_status(
    resp: reqwest::Response,
    expected: &[u16],
) -> Result<reqwest::Response, ClientError> {
    let got = resp.status().as_u16();
    if expected.contains(&got) {
        Ok(resp)
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(ClientError::UnexpectedStatus {
            expected: expected.to_vec(),
            got,
            body,
        })
    }
}
