//! Cross-cutting service plumbing for the Shipway backend.
//!
//! Health handlers, request-id middleware, shared serde helpers, and
//! tracing initialization. No domain logic lives here.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
