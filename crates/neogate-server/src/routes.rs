//! Route table and middleware stack.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use neogate_graph::GraphStore;

use crate::handlers::{health, nodes, query, relationships};
use crate::state::AppState;

/// Build the router over any [`GraphStore`].
///
/// No timeout layer: a hung database connection blocks its request
/// indefinitely, matching the documented resource model.
pub fn create_router<S: GraphStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health::check))
        .route(
            "/nodes/{id}",
            post(nodes::create)
                .get(nodes::get)
                .put(nodes::update)
                .delete(nodes::remove),
        )
        .route("/relationships", post(relationships::create))
        .route("/cypher", post(query::execute))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
