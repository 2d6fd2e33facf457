//! Node CRUD endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use neogate_core::{NodeResponse, Properties};
use neogate_graph::GraphStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Create a node with the given label: `POST /nodes/{label}`.
pub async fn create<S: GraphStore>(
    State(state): State<AppState<S>>,
    Path(label): Path<String>,
    body: Result<Json<Properties>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let properties = require_properties(body)?;
    let node = state.store.create_node(&label, &properties).await?;
    Ok((StatusCode::CREATED, Json(NodeResponse { node })))
}

/// Fetch a node by identity: `GET /nodes/{id}`.
pub async fn get<S: GraphStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<NodeResponse>, ApiError> {
    let id = parse_id(&id)?;
    match state.store.get_node_by_id(id).await? {
        Some(node) => Ok(Json(NodeResponse { node })),
        None => Err(ApiError::NotFound("Node not found".to_string())),
    }
}

/// Merge properties into a node: `PUT /nodes/{id}`.
pub async fn update<S: GraphStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Result<Json<Properties>, JsonRejection>,
) -> Result<Json<NodeResponse>, ApiError> {
    let id = parse_id(&id)?;
    let properties = require_properties(body)?;
    match state.store.update_node(id, &properties).await? {
        Some(node) => Ok(Json(NodeResponse { node })),
        None => Err(ApiError::NotFound("Node not found".to_string())),
    }
}

/// Detach-delete a node: `DELETE /nodes/{id}`.
pub async fn remove<S: GraphStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if state.store.delete_node(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Node not found".to_string()))
    }
}

/// A property body must be present, be a JSON object, and be non-empty.
fn require_properties(
    body: Result<Json<Properties>, JsonRejection>,
) -> Result<Properties, ApiError> {
    let Json(properties) =
        body.map_err(|_| ApiError::BadRequest("No data provided".to_string()))?;
    if properties.is_empty() {
        return Err(ApiError::BadRequest("No data provided".to_string()));
    }
    Ok(properties)
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid node id: {raw}")))
}
