//! Work done once between connecting to the database and binding the listener.

use helpdesk_core::migration::{MigrationOutcome, SeedPolicy};
use helpdesk_db::additive::AdditiveMigration;
use helpdesk_db::DbPool;

use crate::config::ServerConfig;

/// Run the `asset_types` migration when `MIGRATE_ASSET_TYPES_ON_STARTUP` is set.
///
/// Returns `None` when disabled. A failed migration is logged and returned,
/// never raised: the server starts either way.
pub async fn run_startup_migration(
    pool: &DbPool,
    config: &ServerConfig,
) -> Option<MigrationOutcome> {
    if !config.migrate_asset_types_on_startup {
        tracing::debug!("Startup asset_types migration disabled");
        return None;
    }

    let policy = SeedPolicy::from_top_up_flag(config.asset_types_top_up_seeds);
    let outcome = AdditiveMigration::asset_types(policy).run(pool).await;
    if outcome.is_failure() {
        tracing::warn!(?outcome, "Startup asset_types migration failed, continuing");
    } else {
        tracing::info!(?outcome, "Startup asset_types migration finished");
    }
    Some(outcome)
}
