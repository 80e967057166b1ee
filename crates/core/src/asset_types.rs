//! The `asset_types` lookup table and its default rows.

use crate::schema::{ColumnSpec, ColumnType, TableSpec};

pub const ASSET_TYPES_TABLE: &str = "asset_types";

/// Columns written by the seed insert; `id` and `is_active` take their defaults.
pub const SEED_COLUMNS: &[&str] = &["code", "label"];

/// Seed rows are skipped when a row with the same code already exists.
pub const SEED_CONFLICT_COLUMN: &str = "code";

/// A default asset type inserted on first creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRow {
    pub code: &'static str,
    pub label: &'static str,
}

pub const DEFAULT_ASSET_TYPES: &[SeedRow] = &[
    SeedRow {
        code: "desktop",
        label: "Ordinateur fixe",
    },
    SeedRow {
        code: "laptop",
        label: "Ordinateur portable",
    },
    SeedRow {
        code: "printer",
        label: "Imprimante",
    },
    SeedRow {
        code: "monitor",
        label: "Écran",
    },
    SeedRow {
        code: "mobile",
        label: "Mobile",
    },
    SeedRow {
        code: "tablet",
        label: "Tablette",
    },
    SeedRow {
        code: "phone",
        label: "Téléphone",
    },
    SeedRow {
        code: "network",
        label: "Équipement réseau",
    },
];

/// `asset_types(id PK, code TEXT UNIQUE NOT NULL, label TEXT NOT NULL,
/// is_active BOOLEAN NOT NULL DEFAULT TRUE)`
pub fn table_spec() -> TableSpec {
    TableSpec {
        name: ASSET_TYPES_TABLE,
        columns: vec![
            ColumnSpec::new("id", ColumnType::BigSerial).primary_key(),
            ColumnSpec::new("code", ColumnType::Text).not_null().unique(),
            ColumnSpec::new("label", ColumnType::Text).not_null(),
            ColumnSpec::new("is_active", ColumnType::Boolean)
                .not_null()
                .default_expr("TRUE"),
        ],
    }
}
