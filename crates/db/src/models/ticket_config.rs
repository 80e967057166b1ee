//! Ticket type and ticket category configuration rows.

use serde::Serialize;
use sqlx::FromRow;

/// A row from `ticket_types`, as exposed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TicketType {
    pub code: String,
    pub label: String,
    pub is_active: bool,
}

/// A row from `ticket_categories`, as exposed by the catalog.
///
/// `type_code` is a weak reference to `ticket_types.code`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TicketCategory {
    pub name: String,
    pub type_code: Option<String>,
    pub is_active: bool,
}
