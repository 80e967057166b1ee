//! Domain types for the helpdesk configuration catalog.
//!
//! Pure code only: nothing in this crate touches the database. The `db`
//! crate renders these descriptions into SQL and executes them.

pub mod asset_types;
pub mod catalog;
pub mod config;
pub mod error;
pub mod migration;
pub mod schema;
pub mod types;
