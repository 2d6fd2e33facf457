//! neogate-server — HTTP service layer for the neogate REST facade.
//!
//! Thin by design: handlers validate presence of required fields, delegate
//! to a [`GraphStore`](neogate_graph::GraphStore), and map outcomes to
//! status codes. The adapter is constructed once in `main` and injected
//! through router state, so tests can run the real router against a mock.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
