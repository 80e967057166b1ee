use helpdesk_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `asset_types` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct AssetType {
    pub id: DbId,
    pub code: String,
    pub label: String,
    pub is_active: bool,
}
