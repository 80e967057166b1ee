//! Helpdesk configuration catalog API server library.
//!
//! Exposes config, state, error handling, auth, routes and startup work so
//! integration tests and the binary entrypoint share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod startup;
pub mod state;
