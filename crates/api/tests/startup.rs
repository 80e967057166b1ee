//! Integration tests for the optional startup `asset_types` migration.

mod common;

use assert_matches::assert_matches;
use helpdesk_api::startup::run_startup_migration;
use helpdesk_core::migration::MigrationOutcome;
use helpdesk_db::repositories::AssetTypeRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_startup_migration_disabled_by_default(pool: PgPool) {
    let config = common::test_config();

    assert_eq!(run_startup_migration(&pool, &config).await, None);
    assert!(!AssetTypeRepo::table_exists(&pool, "asset_types").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_startup_migration_creates_and_seeds(pool: PgPool) {
    let mut config = common::test_config();
    config.migrate_asset_types_on_startup = true;

    let outcome = run_startup_migration(&pool, &config).await;
    assert_eq!(outcome, Some(MigrationOutcome::Created { seeded: 8 }));
    assert_eq!(AssetTypeRepo::list(&pool).await.unwrap().len(), 8);

    // A restart finds the table and changes nothing.
    let outcome = run_startup_migration(&pool, &config).await;
    assert_eq!(outcome, Some(MigrationOutcome::AlreadyPresent));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_startup_migration_tops_up_when_configured(pool: PgPool) {
    sqlx::query(
        "CREATE TABLE asset_types ( \
            id BIGSERIAL PRIMARY KEY, code TEXT UNIQUE NOT NULL, \
            label TEXT NOT NULL, is_active BOOLEAN NOT NULL DEFAULT TRUE \
         )",
    )
    .execute(&pool)
    .await
    .unwrap();

    let mut config = common::test_config();
    config.migrate_asset_types_on_startup = true;
    config.asset_types_top_up_seeds = true;

    let outcome = run_startup_migration(&pool, &config).await;
    assert_eq!(outcome, Some(MigrationOutcome::ToppedUp { seeded: 8 }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_startup_migration_failure_is_not_fatal(pool: PgPool) {
    let mut config = common::test_config();
    config.migrate_asset_types_on_startup = true;
    pool.close().await;

    let outcome = run_startup_migration(&pool, &config).await;
    assert_matches!(outcome, Some(MigrationOutcome::Failed { .. }));
}
