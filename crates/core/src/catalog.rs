//! Read-only catalog queries over ticket types and ticket categories.
//!
//! A [`CatalogQuery`] accumulates [`Predicate`] clauses, which are ANDed
//! together, plus a single ascending sort column. It renders them into one
//! parameterized `SELECT` that the repository layer executes in a single
//! round-trip. Ordering follows the column's default collation in the store;
//! there is no secondary sort key.

// ---------------------------------------------------------------------------
// Table and column names
// ---------------------------------------------------------------------------

pub const TICKET_TYPES_TABLE: &str = "ticket_types";
pub const TICKET_TYPE_COLUMNS: &[&str] = &["code", "label", "is_active"];

pub const TICKET_CATEGORIES_TABLE: &str = "ticket_categories";
pub const TICKET_CATEGORY_COLUMNS: &[&str] = &["name", "type_code", "is_active"];

/// Activity flag column shared by every catalog table.
pub const ACTIVE_COLUMN: &str = "is_active";

// ---------------------------------------------------------------------------
// Predicate builder
// ---------------------------------------------------------------------------

/// A single `WHERE` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `is_active = true`
    ActiveOnly,
    /// `<column> = $n`, compared by exact equality.
    Equals {
        column: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct CatalogQuery {
    table: &'static str,
    columns: &'static [&'static str],
    predicates: Vec<Predicate>,
    order_by: Option<&'static str>,
}

impl CatalogQuery {
    pub fn new(table: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            table,
            columns,
            predicates: Vec::new(),
            order_by: None,
        }
    }

    pub fn active_only(mut self) -> Self {
        self.predicates.push(Predicate::ActiveOnly);
        self
    }

    pub fn filter_eq(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate::Equals {
            column,
            value: value.into(),
        });
        self
    }

    /// Sort ascending by `column`. A later call replaces an earlier one.
    pub fn order_by(mut self, column: &'static str) -> Self {
        self.order_by = Some(column);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Render the query with `$1..$n` placeholders in predicate order.
    pub fn to_sql(&self) -> String {
        let mut sql = format!("SELECT {} FROM {}", self.columns.join(", "), self.table);

        let mut placeholder = 0;
        let clauses: Vec<String> = self
            .predicates
            .iter()
            .map(|p| match p {
                Predicate::ActiveOnly => format!("{ACTIVE_COLUMN} = true"),
                Predicate::Equals { column, .. } => {
                    placeholder += 1;
                    format!("{column} = ${placeholder}")
                }
            })
            .collect();

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        if let Some(column) = self.order_by {
            sql.push_str(&format!(" ORDER BY {column} ASC"));
        }

        sql
    }

    /// Values to bind, in placeholder order.
    pub fn bind_values(&self) -> Vec<&str> {
        self.predicates
            .iter()
            .filter_map(|p| match p {
                Predicate::ActiveOnly => None,
                Predicate::Equals { value, .. } => Some(value.as_str()),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Catalog queries
// ---------------------------------------------------------------------------

/// Active ticket types ordered by label.
pub fn ticket_types_query() -> CatalogQuery {
    CatalogQuery::new(TICKET_TYPES_TABLE, TICKET_TYPE_COLUMNS)
        .active_only()
        .order_by("label")
}

/// Active ticket categories ordered by name, optionally restricted to one type.
///
/// The type filter is advisory: it is not checked against `ticket_types`, so an
/// unknown code matches nothing rather than failing. An empty string counts as
/// no filter.
pub fn ticket_categories_query(type_code: Option<&str>) -> CatalogQuery {
    let query = CatalogQuery::new(TICKET_CATEGORIES_TABLE, TICKET_CATEGORY_COLUMNS).active_only();

    let query = match normalize_type_code(type_code) {
        Some(code) => query.filter_eq("type_code", code),
        None => query,
    };

    query.order_by("name")
}

/// Drop an empty `type_code` filter. Non-empty values are kept verbatim.
pub fn normalize_type_code(type_code: Option<&str>) -> Option<&str> {
    type_code.filter(|code| !code.is_empty())
}
