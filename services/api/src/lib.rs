//! Shipway api service: accounts, cargo, orders, and payments behind one
//! HTTP surface. `main.rs` wires config, database, and the gateway client
//! into `router::build_router`.

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod infra;
pub mod router;
pub mod state;
pub mod usecase;
