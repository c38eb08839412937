//! Server library module.
//!
//! Everything the binary wires together lives here so integration tests can
//! build the same router.

pub mod config;
pub mod routes;
