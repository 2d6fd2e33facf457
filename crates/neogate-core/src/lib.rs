//! neogate-core: shared wire types for the neogate REST facade.
//!
//! Both the server and the client depend on this crate, so the request and
//! response schema is pinned in exactly one place. There is deliberately no
//! logic here: records, envelopes, and request bodies only.

pub mod types;

pub use types::{
    ErrorBody, HealthResponse, NodeRecord, NodeResponse, Properties, QueryMode, QueryRequest,
    RelationshipRecord, RelationshipRequest, RelationshipResponse,
};
