//! `helpdesk-migrate`: create and seed `asset_types` if it is missing.
//!
//! | Env Var                    | Required | Default |
//! |----------------------------|----------|---------|
//! | `DATABASE_URL`             | **yes**  | --      |
//! | `ASSET_TYPES_TOP_UP_SEEDS` | no       | `false` |
//!
//! Always exits 0; see the log for the result.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "helpdesk_migrate=info,helpdesk_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").ok();
    let top_up_flag = std::env::var("ASSET_TYPES_TOP_UP_SEEDS").ok();

    let report = helpdesk_migrate::run(database_url.as_deref(), top_up_flag.as_deref()).await;
    tracing::debug!(?report, "Exiting");
}
