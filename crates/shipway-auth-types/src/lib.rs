//! Auth types shared across the Shipway backend.
//!
//! Provides the gateway identity extractor, the machine api-key extractor,
//! and the package access-scope policy value.

pub mod api_key;
pub mod identity;
pub mod scope;
