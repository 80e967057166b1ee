//! One-shot, non-destructive `asset_types` migration.
//!
//! Every step is logged. Nothing here returns an error or panics: a missing
//! database URL, an unreachable database and a failed migration all end in a
//! [`RunReport`] so the binary can exit normally. Operators must read the
//! output.

use std::time::Duration;

use helpdesk_core::config::parse_flag;
use helpdesk_core::migration::{MigrationOutcome, SeedPolicy};
use helpdesk_db::additive::AdditiveMigration;
use helpdesk_db::DbPool;

/// How long to keep retrying the initial connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// How far a run got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    /// No database URL was supplied; nothing was attempted.
    NotConfigured,
    /// The database could not be reached; nothing was changed.
    Unreachable { message: String },
    /// The migration ran and ended with this outcome.
    Completed(MigrationOutcome),
}

/// Seed policy from the raw `ASSET_TYPES_TOP_UP_SEEDS` value.
///
/// An unrecognised value is logged and treated as unset.
pub fn seed_policy(top_up_flag: Option<&str>) -> SeedPolicy {
    let top_up = match top_up_flag {
        Some(value) => parse_flag(value).unwrap_or_else(|| {
            tracing::warn!(%value, "ASSET_TYPES_TOP_UP_SEEDS is not a boolean, ignoring");
            false
        }),
        None => false,
    };
    SeedPolicy::from_top_up_flag(top_up)
}

/// Connect to `database_url` and run the `asset_types` migration.
pub async fn run(database_url: Option<&str>, top_up_flag: Option<&str>) -> RunReport {
    let Some(database_url) = database_url else {
        tracing::error!("DATABASE_URL must be set, nothing migrated");
        return RunReport::NotConfigured;
    };
    let policy = seed_policy(top_up_flag);

    let pool = match helpdesk_db::create_oneshot_pool(database_url, CONNECT_TIMEOUT).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database, nothing migrated");
            return RunReport::Unreachable {
                message: e.to_string(),
            };
        }
    };

    let outcome = run_on_pool(&pool, policy).await;
    pool.close().await;
    RunReport::Completed(outcome)
}

/// Run the `asset_types` migration over an existing pool.
pub async fn run_on_pool(pool: &DbPool, policy: SeedPolicy) -> MigrationOutcome {
    let migration = AdditiveMigration::asset_types(policy);
    let table = migration.table_name();

    let outcome = migration.run(pool).await;
    match &outcome {
        MigrationOutcome::Failed { message } => {
            tracing::error!(table, %message, "Migration did not complete");
        }
        outcome => {
            tracing::info!(table, ?outcome, "Migration completed successfully");
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_policy_from_flag() {
        assert_eq!(seed_policy(None), SeedPolicy::OnCreate);
        assert_eq!(seed_policy(Some("true")), SeedPolicy::TopUp);
        assert_eq!(seed_policy(Some("off")), SeedPolicy::OnCreate);
    }

    #[test]
    fn test_invalid_flag_falls_back_to_on_create() {
        assert_eq!(seed_policy(Some("maybe")), SeedPolicy::OnCreate);
    }
}
