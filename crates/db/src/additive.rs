//! Additive migration runner.
//!
//! Brings the schema forward by exactly one non-destructive step: create a
//! lookup table and seed its default rows. An existing table is never
//! altered, truncated or re-seeded (unless [`SeedPolicy::TopUp`] asks for the
//! missing default codes), and every failure is logged and swallowed so the
//! entry point never propagates an error.

use helpdesk_core::asset_types::{self, SeedRow, DEFAULT_ASSET_TYPES};
use helpdesk_core::error::CoreError;
use helpdesk_core::migration::{
    is_duplicate_table, plan, MigrationOutcome, MigrationStep, SeedPolicy, TableState,
};
use helpdesk_core::schema::TableSpec;
use sqlx::PgPool;

use crate::repositories::AssetTypeRepo;

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error(transparent)]
    Schema(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl MigrationError {
    /// Whether another runner created the table between our check and create.
    fn is_concurrent_create(&self) -> bool {
        match self {
            MigrationError::Database(sqlx::Error::Database(db_err)) => {
                is_duplicate_table(db_err.code().as_deref(), db_err.constraint())
            }
            _ => false,
        }
    }
}

/// One "ensure table exists" step with its seed rows.
#[derive(Debug, Clone)]
pub struct AdditiveMigration {
    spec: TableSpec,
    seed_rows: &'static [SeedRow],
    policy: SeedPolicy,
}

impl AdditiveMigration {
    pub fn new(spec: TableSpec, seed_rows: &'static [SeedRow], policy: SeedPolicy) -> Self {
        Self {
            spec,
            seed_rows,
            policy,
        }
    }

    /// The `asset_types` table with its eight default asset types.
    pub fn asset_types(policy: SeedPolicy) -> Self {
        Self::new(asset_types::table_spec(), DEFAULT_ASSET_TYPES, policy)
    }

    pub fn table_name(&self) -> &'static str {
        self.spec.name
    }

    /// Run the migration. Never fails: errors are logged and reported as
    /// [`MigrationOutcome::Failed`] after the transaction has rolled back.
    pub async fn run(&self, pool: &PgPool) -> MigrationOutcome {
        let table = self.spec.name;
        tracing::info!(table, policy = ?self.policy, "Starting additive migration");

        let outcome = match self.try_run(pool).await {
            Ok(outcome) => outcome,
            Err(e) if e.is_concurrent_create() => {
                tracing::info!(table, "Table was created by a concurrent run, no changes made");
                MigrationOutcome::LostRace
            }
            Err(e) => {
                tracing::error!(table, error = %e, "Migration failed, changes rolled back");
                MigrationOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        if !outcome.is_failure() {
            tracing::info!(
                table,
                rows_added = outcome.rows_added(),
                "Migration finished, no existing data was modified"
            );
        }
        outcome
    }

    async fn try_run(&self, pool: &PgPool) -> Result<MigrationOutcome, MigrationError> {
        self.spec.validate()?;
        let table = self.spec.name;

        let state = if AssetTypeRepo::table_exists(pool, table).await? {
            TableState::Present
        } else {
            TableState::Absent
        };

        match plan(state, self.policy) {
            MigrationStep::Nothing => {
                tracing::info!(table, "Table already exists, no changes made");
                Ok(MigrationOutcome::AlreadyPresent)
            }
            MigrationStep::CreateAndSeed => {
                // Creation and seeding commit together; dropping `tx` on error rolls both back.
                let mut tx = pool.begin().await?;

                tracing::info!(table, "Creating table");
                AssetTypeRepo::create_table(&mut *tx, &self.spec).await?;
                tracing::info!(table, "Table created");

                tracing::info!(table, count = self.seed_rows.len(), "Inserting default rows");
                let seeded =
                    AssetTypeRepo::insert_seed_rows(&mut *tx, &self.spec, self.seed_rows).await?;

                tx.commit().await?;
                tracing::info!(table, seeded, "Default rows inserted");
                Ok(MigrationOutcome::Created { seeded })
            }
            MigrationStep::SeedOnly => {
                tracing::info!(table, "Table already exists, adding missing default rows");
                let mut tx = pool.begin().await?;
                let seeded =
                    AssetTypeRepo::insert_seed_rows(&mut *tx, &self.spec, self.seed_rows).await?;
                tx.commit().await?;
                tracing::info!(table, seeded, "Missing default rows inserted");
                Ok(MigrationOutcome::ToppedUp { seeded })
            }
        }
    }
}
