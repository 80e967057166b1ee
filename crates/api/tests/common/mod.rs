#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use helpdesk_api::auth::jwt::{generate_access_token, JwtConfig};
use helpdesk_api::config::ServerConfig;
use helpdesk_api::router::build_app_router;
use helpdesk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        migrate_asset_types_on_startup: false,
        asset_types_top_up_seeds: false,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router, with the production middleware stack,
/// over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A valid bearer token signed with the test secret.
pub fn auth_token() -> String {
    generate_access_token(7, "agent", &test_config().jwt).expect("token generation should succeed")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn insert_type(pool: &PgPool, code: &str, label: &str, is_active: bool) {
    sqlx::query("INSERT INTO ticket_types (code, label, is_active) VALUES ($1, $2, $3)")
        .bind(code)
        .bind(label)
        .bind(is_active)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_category(pool: &PgPool, name: &str, type_code: Option<&str>, is_active: bool) {
    sqlx::query("INSERT INTO ticket_categories (name, type_code, is_active) VALUES ($1, $2, $3)")
        .bind(name)
        .bind(type_code)
        .bind(is_active)
        .execute(pool)
        .await
        .unwrap();
}
