//! Relationship creation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use neogate_core::{RelationshipRequest, RelationshipResponse};
use neogate_graph::GraphStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Create a typed relationship between two nodes: `POST /relationships`.
///
/// A missing endpoint node yields 201 with an empty body `{}` rather than
/// 404: the adapter's MATCH finds nothing and reports an empty result,
/// not a not-found condition.
pub async fn create<S: GraphStore>(
    State(state): State<AppState<S>>,
    body: Result<Json<RelationshipRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|_| missing_fields())?;
    let (Some(from_id), Some(to_id), Some(rel_type)) = (req.from_id, req.to_id, req.rel_type)
    else {
        return Err(missing_fields());
    };

    let relationship = state
        .store
        .create_relationship(from_id, to_id, &rel_type, &req.properties)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RelationshipResponse { relationship }),
    ))
}

fn missing_fields() -> ApiError {
    ApiError::BadRequest("Required fields: from_id, to_id, type".to_string())
}
