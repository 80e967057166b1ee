//! Route definitions for the ticket configuration catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::ticket_config;
use crate::state::AppState;

/// Routes mounted at `/ticket-config`.
///
/// ```text
/// GET  /types                       -> list_types
/// GET  /categories?type_code=       -> list_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/types", get(ticket_config::list_types))
        .route("/categories", get(ticket_config::list_categories))
}
