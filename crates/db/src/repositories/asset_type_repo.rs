//! Repository for the `asset_types` lookup table and its schema.

use helpdesk_core::asset_types::{
    SeedRow, ASSET_TYPES_TABLE, SEED_COLUMNS, SEED_CONFLICT_COLUMN,
};
use helpdesk_core::schema::TableSpec;
use sqlx::{PgConnection, PgPool};

use crate::models::asset_type::AssetType;

const COLUMNS: &str = "id, code, label, is_active";

pub struct AssetTypeRepo;

impl AssetTypeRepo {
    /// Whether `table_name` exists in the connection's current schema.
    pub async fn table_exists(pool: &PgPool, table_name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS ( \
                SELECT 1 FROM information_schema.tables \
                WHERE table_schema = current_schema() AND table_name = $1 \
             )",
        )
        .bind(table_name)
        .fetch_one(pool)
        .await
    }

    /// Run the `CREATE TABLE` rendered from `spec`.
    pub async fn create_table(
        conn: &mut PgConnection,
        spec: &TableSpec,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(&spec.create_table_sql()).execute(&mut *conn).await?;
        Ok(())
    }

    /// Insert `rows`, skipping any whose code already exists.
    ///
    /// Returns the number of rows actually inserted.
    pub async fn insert_seed_rows(
        conn: &mut PgConnection,
        spec: &TableSpec,
        rows: &[SeedRow],
    ) -> Result<u64, sqlx::Error> {
        let Some(sql) =
            spec.conflict_skip_insert_sql(SEED_COLUMNS, SEED_CONFLICT_COLUMN, rows.len())
        else {
            return Ok(0);
        };

        let mut query = sqlx::query(&sql);
        for row in rows {
            query = query.bind(row.code).bind(row.label);
        }
        let result = query.execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    /// All asset types, active or not, in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<AssetType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {ASSET_TYPES_TABLE} ORDER BY id");
        sqlx::query_as::<_, AssetType>(&query).fetch_all(pool).await
    }

    pub async fn find_by_code(
        pool: &PgPool,
        code: &str,
    ) -> Result<Option<AssetType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {ASSET_TYPES_TABLE} WHERE code = $1");
        sqlx::query_as::<_, AssetType>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }
}
