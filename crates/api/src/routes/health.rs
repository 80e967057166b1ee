//! Root-level `/health`, outside `/api/v1` and without authentication.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use helpdesk_core::asset_types::ASSET_TYPES_TABLE;
use helpdesk_db::repositories::AssetTypeRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether the additive `asset_types` migration has run against this
    /// database. Always `false` while the database is unreachable.
    pub asset_types_present: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = helpdesk_db::health_check(&state.pool).await.is_ok();

    let asset_types_present = db_healthy
        && AssetTypeRepo::table_exists(&state.pool, ASSET_TYPES_TABLE)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Could not inspect asset_types table");
                false
            });

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        asset_types_present,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
