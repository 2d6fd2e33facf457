//! Arbitrary Cypher execution endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use neogate_core::QueryRequest;
use neogate_graph::GraphStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Run a caller-supplied query: `POST /cypher`.
///
/// The optional `mode` field declares read/write intent explicitly; when
/// absent, the adapter falls back to leading-keyword classification.
pub async fn execute<S: GraphStore>(
    State(state): State<AppState<S>>,
    body: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::BadRequest("Query required".to_string()))?;
    let Some(cypher) = req.query.as_deref().filter(|q| !q.trim().is_empty()) else {
        return Err(ApiError::BadRequest("Query required".to_string()));
    };

    let rows = state
        .store
        .run_custom_query(cypher, &req.params, req.mode)
        .await?;
    Ok(Json(rows))
}
