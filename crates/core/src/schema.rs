//! Declarative table descriptions for additive migrations.
//!
//! A [`TableSpec`] says "table T with columns C must exist". The DDL and the
//! conflict-skip seed insert are rendered from it, so the migration runner
//! never carries hand-written statement text.

use crate::error::CoreError;

/// Column storage types used by lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Generated 64-bit identity.
    BigSerial,
    Text,
    Boolean,
}

impl ColumnType {
    fn as_sql(self) -> &'static str {
        match self {
            ColumnType::BigSerial => "BIGSERIAL",
            ColumnType::Text => "TEXT",
            ColumnType::Boolean => "BOOLEAN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub primary_key: bool,
    pub not_null: bool,
    pub unique: bool,
    /// Raw SQL default expression (e.g. `TRUE`).
    pub default: Option<&'static str>,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            primary_key: false,
            not_null: false,
            unique: false,
            default: None,
        }
    }

    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn default_expr(mut self, expr: &'static str) -> Self {
        self.default = Some(expr);
        self
    }

    fn definition(&self) -> String {
        let mut def = format!("{} {}", self.name, self.column_type.as_sql());
        if self.primary_key {
            def.push_str(" PRIMARY KEY");
        }
        if self.not_null {
            def.push_str(" NOT NULL");
        }
        if self.unique {
            def.push_str(" UNIQUE");
        }
        if let Some(expr) = self.default {
            def.push_str(" DEFAULT ");
            def.push_str(expr);
        }
        def
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: Vec<ColumnSpec>,
}

impl TableSpec {
    /// Identifiers are interpolated into DDL, so they must be plain
    /// lowercase snake_case.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !is_identifier(self.name) {
            return Err(CoreError::Validation(format!(
                "Invalid table name '{}'",
                self.name
            )));
        }
        if self.columns.is_empty() {
            return Err(CoreError::Validation(format!(
                "Table '{}' has no columns",
                self.name
            )));
        }
        for (i, column) in self.columns.iter().enumerate() {
            if !is_identifier(column.name) {
                return Err(CoreError::Validation(format!(
                    "Invalid column name '{}' on table '{}'",
                    column.name, self.name
                )));
            }
            if self.columns[..i].iter().any(|c| c.name == column.name) {
                return Err(CoreError::Validation(format!(
                    "Duplicate column '{}' on table '{}'",
                    column.name, self.name
                )));
            }
        }
        Ok(())
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// `CREATE TABLE` statement. Deliberately not `IF NOT EXISTS`: a
    /// concurrent creator must surface as a duplicate-table error.
    pub fn create_table_sql(&self) -> String {
        let columns: Vec<String> = self.columns.iter().map(ColumnSpec::definition).collect();
        format!("CREATE TABLE {} ({})", self.name, columns.join(", "))
    }

    /// Multi-row insert of `rows` tuples over `columns` that does nothing
    /// for rows whose `conflict_column` value already exists.
    ///
    /// Returns `None` when there is nothing to insert or when a named column
    /// is not part of this table.
    pub fn conflict_skip_insert_sql(
        &self,
        columns: &[&str],
        conflict_column: &str,
        rows: usize,
    ) -> Option<String> {
        if rows == 0 || columns.is_empty() {
            return None;
        }
        let known = |name: &str| self.column(name).is_some();
        if !columns.iter().all(|&c| known(c)) || !known(conflict_column) {
            return None;
        }

        let width = columns.len();
        let tuples: Vec<String> = (0..rows)
            .map(|row| {
                let params: Vec<String> = (1..=width)
                    .map(|col| format!("${}", row * width + col))
                    .collect();
                format!("({})", params.join(", "))
            })
            .collect();

        Some(format!(
            "INSERT INTO {} ({}) VALUES {} ON CONFLICT ({}) DO NOTHING",
            self.name,
            columns.join(", "),
            tuples.join(", "),
            conflict_column
        ))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
