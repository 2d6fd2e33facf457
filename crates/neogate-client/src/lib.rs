//! neogate-client — convenience client for the neogate REST facade.
//!
//! One HTTP call per domain operation, with expected-status validation,
//! plus a scripted end-to-end scenario used by the binary.

pub mod api;
pub mod scenario;

pub use api::{ApiClient, ClientError};
