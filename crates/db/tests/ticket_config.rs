//! Integration tests for the read-only ticket configuration catalog.
//!
//! Rows are inserted with raw SQL: the catalog has no write path of its own.

use helpdesk_db::models::ticket_config::{TicketCategory, TicketType};
use helpdesk_db::repositories::{TicketCategoryRepo, TicketTypeRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn insert_type(pool: &PgPool, code: &str, label: &str, is_active: bool) {
    sqlx::query("INSERT INTO ticket_types (code, label, is_active) VALUES ($1, $2, $3)")
        .bind(code)
        .bind(label)
        .bind(is_active)
        .execute(pool)
        .await
        .unwrap();
}

async fn insert_category(pool: &PgPool, name: &str, type_code: Option<&str>, is_active: bool) {
    sqlx::query("INSERT INTO ticket_categories (name, type_code, is_active) VALUES ($1, $2, $3)")
        .bind(name)
        .bind(type_code)
        .bind(is_active)
        .execute(pool)
        .await
        .unwrap();
}

fn ticket_type(code: &str, label: &str) -> TicketType {
    TicketType {
        code: code.to_string(),
        label: label.to_string(),
        is_active: true,
    }
}

fn category(name: &str, type_code: &str) -> TicketCategory {
    TicketCategory {
        name: name.to_string(),
        type_code: Some(type_code.to_string()),
        is_active: true,
    }
}

/// Types `hw` (active) and `sw` (inactive) with three categories.
async fn seed_catalog(pool: &PgPool) {
    insert_type(pool, "hw", "Hardware", true).await;
    insert_type(pool, "sw", "Software", false).await;
    insert_category(pool, "Printer Jam", Some("hw"), true).await;
    insert_category(pool, "Crash", Some("sw"), true).await;
    insert_category(pool, "Disk Full", Some("hw"), false).await;
}

// ---------------------------------------------------------------------------
// Ticket types
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_types_returns_only_active(pool: PgPool) {
    seed_catalog(&pool).await;

    let types = TicketTypeRepo::list_active(&pool).await.unwrap();
    assert_eq!(types, vec![ticket_type("hw", "Hardware")]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_types_sorted_by_label(pool: PgPool) {
    insert_type(&pool, "sw", "Software", true).await;
    insert_type(&pool, "net", "Network", true).await;
    insert_type(&pool, "hw", "Hardware", true).await;
    insert_type(&pool, "acc", "Access", false).await;

    let labels: Vec<String> = TicketTypeRepo::list_active(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.label)
        .collect();
    assert_eq!(labels, ["Hardware", "Network", "Software"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_types_empty_when_none_active(pool: PgPool) {
    assert!(TicketTypeRepo::list_active(&pool).await.unwrap().is_empty());

    insert_type(&pool, "sw", "Software", false).await;
    assert!(TicketTypeRepo::list_active(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Ticket categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_categories_filtered_by_type(pool: PgPool) {
    seed_catalog(&pool).await;

    let categories = TicketCategoryRepo::list_active(&pool, Some("hw")).await.unwrap();
    assert_eq!(categories, vec![category("Printer Jam", "hw")]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_categories_unfiltered_sorted_by_name(pool: PgPool) {
    seed_catalog(&pool).await;

    let categories = TicketCategoryRepo::list_active(&pool, None).await.unwrap();
    assert_eq!(
        categories,
        vec![category("Crash", "sw"), category("Printer Jam", "hw")]
    );
}

/// An inactive parent type does not hide its active categories.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_visibility_ignores_parent_activity(pool: PgPool) {
    seed_catalog(&pool).await;

    let categories = TicketCategoryRepo::list_active(&pool, Some("sw")).await.unwrap();
    assert_eq!(categories, vec![category("Crash", "sw")]);
}

/// An unknown code is not validated against `ticket_types`: it simply
/// matches nothing. This is the intended permissive-filter behaviour.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_type_code_yields_empty_list(pool: PgPool) {
    seed_catalog(&pool).await;

    for code in ["unknown", "HW", "hw "] {
        let categories = TicketCategoryRepo::list_active(&pool, Some(code)).await.unwrap();
        assert!(categories.is_empty(), "'{code}' should match nothing");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_type_code_means_no_filter(pool: PgPool) {
    seed_catalog(&pool).await;

    let filtered = TicketCategoryRepo::list_active(&pool, Some("")).await.unwrap();
    let unfiltered = TicketCategoryRepo::list_active(&pool, None).await.unwrap();
    assert_eq!(filtered, unfiltered);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_categories_without_type_are_listed_unfiltered_only(pool: PgPool) {
    seed_catalog(&pool).await;
    insert_category(&pool, "Other", None, true).await;

    let all = TicketCategoryRepo::list_active(&pool, None).await.unwrap();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Crash", "Other", "Printer Jam"]);
    assert_eq!(all[1].type_code, None);

    let hw = TicketCategoryRepo::list_active(&pool, Some("hw")).await.unwrap();
    assert!(hw.iter().all(|c| c.name != "Other"));
}
