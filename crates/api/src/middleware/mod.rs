//! Request extractors enforcing access preconditions.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated caller from a JWT Bearer token.

pub mod auth;
