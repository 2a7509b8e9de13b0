//! Integration tests for the character detail screen.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, location, post};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Test: detail view of a known character
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn detail_renders_character_with_placeholders(pool: SqlitePool) {
    let test = common::build_test_app(pool).await;
    let response = get(test.app(), "/character/1009610").await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["id"], 1009610);
    assert_eq!(data["name"], "Spider-Man");
    assert_eq!(data["description"], "No description");
    assert_eq!(data["comics"], "Amazing Fantasy #15, ASM #1");
    assert_eq!(data["in_collection"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn detail_of_character_without_comics_or_name(pool: SqlitePool) {
    let test = common::build_test_app(pool).await;
    let data = body_json(get(test.app(), "/character/1009629").await).await["data"].clone();

    assert_eq!(data["name"], "No name");
    assert_eq!(data["comics"], "No comics");
}

// ---------------------------------------------------------------------------
// Test: bad identifiers redirect to the library instead of failing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_id_redirects_to_library(pool: SqlitePool) {
    let test = common::build_test_app(pool).await;
    let response = get(test.app(), "/character").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/library");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unparseable_ids_redirect_to_library(pool: SqlitePool) {
    let test = common::build_test_app(pool).await;

    for raw in ["null", "abc", "12x", "%20", "1.5"] {
        let response = get(test.app(), &format!("/character/{raw}")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "id {raw:?}");
        assert_eq!(location(&response), "/library", "id {raw:?}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_character_redirects_to_library(pool: SqlitePool) {
    let test = common::build_test_app(pool).await;
    let response = get(test.app(), "/character/42").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/library");
}

// ---------------------------------------------------------------------------
// Test: catalog failure on the detail screen
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn fetch_failure_offers_retry_of_detail(pool: SqlitePool) {
    let test = common::build_test_app(pool).await;
    test.catalog.set_offline(true);

    let response = get(test.app(), "/character/1009610").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FETCH_FAILED");
    assert_eq!(json["retry"], "/character/1009610");
}

// ---------------------------------------------------------------------------
// Test: adding to the collection from the detail screen
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn collect_adds_entry_and_sets_flag(pool: SqlitePool) {
    let test = common::build_test_app(pool).await;

    let response = post(test.app(), "/character/1009610/collect").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let entry = body_json(response).await["data"].clone();
    assert_eq!(entry["id"], 1009610);
    assert_eq!(entry["name"], "Spider-Man");
    assert_eq!(entry["comics"], "Amazing Fantasy #15, ASM #1");

    let data = body_json(get(test.app(), "/character/1009610").await).await["data"].clone();
    assert_eq!(data["in_collection"], true);
    assert!(test.manager.contains(1009610));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn collecting_twice_keeps_one_entry(pool: SqlitePool) {
    let test = common::build_test_app(pool).await;

    for _ in 0..2 {
        let response = post(test.app(), "/character/1011334/collect").await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    assert_eq!(test.manager.entries().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn collecting_unknown_character_is_404(pool: SqlitePool) {
    let test = common::build_test_app(pool).await;
    let response = post(test.app(), "/character/42/collect").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    assert!(test.manager.entries().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn collecting_malformed_id_is_json_400(pool: SqlitePool) {
    let test = common::build_test_app(pool).await;
    let response = post(test.app(), "/character/spider/collect").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Invalid id 'spider'");
}
