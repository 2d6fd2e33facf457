use axum::{extract::State, http::StatusCode, Json};

use neogate_core::HealthResponse;
use neogate_graph::GraphStore;

use crate::state::AppState;

pub async fn check<S: GraphStore>(
    State(state): State<AppState<S>>,
) -> (StatusCode, Json<HealthResponse>) {
    if state.store.verify_connectivity().await {
        (StatusCode::OK, Json(HealthResponse::healthy()))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse::unhealthy()),
        )
    }
}
