//! Shared application state injected into request handlers.

use std::sync::Arc;

/// Holds the graph adapter for the service's lifetime.
///
/// Constructed once in `main`, cloned per request by the router. No other
/// cross-request state exists: every entity is fetched fresh per request.
pub struct AppState<S> {
    pub store: Arc<S>,
}

impl<S> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
