//! Handlers for the read-only `/ticket-config` catalog.
//!
//! Both endpoints require an authenticated caller and return bare JSON
//! arrays of active rows in a deterministic order.

use axum::extract::{Query, State};
use axum::Json;
use helpdesk_db::models::ticket_config::{TicketCategory, TicketType};
use helpdesk_db::repositories::{TicketCategoryRepo, TicketTypeRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::CategoryFilterParams;
use crate::state::AppState;

/// GET /api/v1/ticket-config/types
///
/// Active ticket types ordered by label.
pub async fn list_types(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TicketType>>> {
    let types = TicketTypeRepo::list_active(&state.pool).await?;
    tracing::debug!(user_id = user.user_id, count = types.len(), "Listed ticket types");
    Ok(Json(types))
}

/// GET /api/v1/ticket-config/categories?type_code=
///
/// Active ticket categories ordered by name. An unknown `type_code` is not
/// an error; it yields an empty array.
pub async fn list_categories(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<CategoryFilterParams>,
) -> AppResult<Json<Vec<TicketCategory>>> {
    let categories =
        TicketCategoryRepo::list_active(&state.pool, params.type_code.as_deref()).await?;
    tracing::debug!(
        user_id = user.user_id,
        type_code = params.type_code.as_deref(),
        count = categories.len(),
        "Listed ticket categories"
    );
    Ok(Json(categories))
}
