//! Read-only repositories for `ticket_types` and `ticket_categories`.

use helpdesk_core::catalog::{self, CatalogQuery};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use crate::models::ticket_config::{TicketCategory, TicketType};

/// Execute a rendered catalog query in a single round-trip.
async fn fetch_catalog<T>(pool: &PgPool, query: &CatalogQuery) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = query.to_sql();
    let mut prepared = sqlx::query_as::<_, T>(&sql);
    for value in query.bind_values() {
        prepared = prepared.bind(value);
    }
    prepared.fetch_all(pool).await
}

pub struct TicketTypeRepo;

impl TicketTypeRepo {
    /// Active ticket types ordered by label.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<TicketType>, sqlx::Error> {
        fetch_catalog(pool, &catalog::ticket_types_query()).await
    }
}

pub struct TicketCategoryRepo;

impl TicketCategoryRepo {
    /// Active ticket categories ordered by name.
    ///
    /// `type_code` is matched exactly and never validated against
    /// `ticket_types`; an unknown code yields an empty list.
    pub async fn list_active(
        pool: &PgPool,
        type_code: Option<&str>,
    ) -> Result<Vec<TicketCategory>, sqlx::Error> {
        fetch_catalog(pool, &catalog::ticket_categories_query(type_code)).await
    }
}
