//! Cadastros API server library.
//!
//! Exposes config, state, the record store, error handling and routes so
//! integration tests and the binary entrypoint share one router.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
