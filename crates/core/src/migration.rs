//! State machine for additive, idempotent lookup-table migrations.
//!
//! A run observes whether the table exists, picks a [`MigrationStep`] with
//! [`plan`], and reports a [`MigrationOutcome`]. No step ever alters, drops
//! or truncates an existing table, and no step re-inserts an existing code.

/// PostgreSQL SQLSTATE for `duplicate_table`.
pub const DUPLICATE_TABLE_SQLSTATE: &str = "42P07";

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION_SQLSTATE: &str = "23505";

/// System catalog indexes hit when two sessions create the same relation at once.
pub const CATALOG_NAME_INDEXES: &[&str] =
    &["pg_type_typname_nsp_index", "pg_class_relname_nsp_index"];

/// What the runner observed before acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    Absent,
    Present,
}

/// When the default rows are inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Only in the same run that creates the table.
    #[default]
    OnCreate,
    /// Also when the table already exists, adding only missing codes.
    TopUp,
}

impl SeedPolicy {
    pub fn from_top_up_flag(top_up: bool) -> Self {
        if top_up {
            SeedPolicy::TopUp
        } else {
            SeedPolicy::OnCreate
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationStep {
    CreateAndSeed,
    SeedOnly,
    Nothing,
}

pub fn plan(state: TableState, policy: SeedPolicy) -> MigrationStep {
    match (state, policy) {
        (TableState::Absent, _) => MigrationStep::CreateAndSeed,
        (TableState::Present, SeedPolicy::OnCreate) => MigrationStep::Nothing,
        (TableState::Present, SeedPolicy::TopUp) => MigrationStep::SeedOnly,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Table created and `seeded` default rows inserted.
    Created { seeded: u64 },
    /// Table already existed; nothing done.
    AlreadyPresent,
    /// Another runner created the table between our check and our create.
    LostRace,
    /// Table already existed; `seeded` missing default rows inserted.
    ToppedUp { seeded: u64 },
    /// The run was rolled back.
    Failed { message: String },
}

impl MigrationOutcome {
    pub fn rows_added(&self) -> u64 {
        match self {
            MigrationOutcome::Created { seeded } | MigrationOutcome::ToppedUp { seeded } => *seeded,
            _ => 0,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, MigrationOutcome::Failed { .. })
    }
}

/// Whether a database error means the table was created concurrently.
///
/// PostgreSQL reports this as `42P07`, or as a unique violation on the
/// `pg_type`/`pg_class` catalogs when both creates were in flight at once.
pub fn is_duplicate_table(sqlstate: Option<&str>, constraint: Option<&str>) -> bool {
    match sqlstate {
        Some(DUPLICATE_TABLE_SQLSTATE) => true,
        Some(UNIQUE_VIOLATION_SQLSTATE) => {
            constraint.is_some_and(|c| CATALOG_NAME_INDEXES.contains(&c))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_table_is_always_created_and_seeded() {
        assert_eq!(plan(TableState::Absent, SeedPolicy::OnCreate), MigrationStep::CreateAndSeed);
        assert_eq!(plan(TableState::Absent, SeedPolicy::TopUp), MigrationStep::CreateAndSeed);
    }

    #[test]
    fn present_table_short_circuits_by_default() {
        assert_eq!(plan(TableState::Present, SeedPolicy::default()), MigrationStep::Nothing);
    }

    #[test]
    fn present_table_is_topped_up_only_on_request() {
        assert_eq!(plan(TableState::Present, SeedPolicy::TopUp), MigrationStep::SeedOnly);
        assert_eq!(SeedPolicy::from_top_up_flag(true), SeedPolicy::TopUp);
        assert_eq!(SeedPolicy::from_top_up_flag(false), SeedPolicy::OnCreate);
    }

    #[test]
    fn rows_added_counts_only_inserting_outcomes() {
        assert_eq!(MigrationOutcome::Created { seeded: 8 }.rows_added(), 8);
        assert_eq!(MigrationOutcome::ToppedUp { seeded: 3 }.rows_added(), 3);
        assert_eq!(MigrationOutcome::AlreadyPresent.rows_added(), 0);
        assert_eq!(MigrationOutcome::LostRace.rows_added(), 0);
        let failed = MigrationOutcome::Failed {
            message: "permission denied".into(),
        };
        assert_eq!(failed.rows_added(), 0);
        assert!(failed.is_failure());
        assert!(!MigrationOutcome::LostRace.is_failure());
    }

    #[test]
    fn duplicate_table_detection() {
        assert!(is_duplicate_table(Some("42P07"), None));
        assert!(is_duplicate_table(Some("23505"), Some("pg_type_typname_nsp_index")));
        assert!(is_duplicate_table(Some("23505"), Some("pg_class_relname_nsp_index")));
        assert!(!is_duplicate_table(Some("23505"), None));
        assert!(!is_duplicate_table(Some("23505"), Some("asset_types_code_key")));
        assert!(!is_duplicate_table(Some("42501"), None));
        assert!(!is_duplicate_table(None, None));
    }
}
