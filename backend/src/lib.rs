//! Tagarela: an in-memory gossip board served over HTTP.
//!
//! Users sign up, write gossip about one another, and can be removed only
//! while no post mentions them.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
