//! Test utilities for the Shipway backend.
//!
//! Provides the `MockIdentity` header builder used to exercise routes
//! as if the auth edge had injected identity. Import in `#[cfg(test)]`
//! blocks and `tests/` only — never in production code.

pub mod identity;
