pub mod health;
pub mod ticket_config;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ticket-config/types                              active ticket types (auth required)
/// /ticket-config/categories                         active categories, ?type_code= (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/ticket-config", ticket_config::router())
}
