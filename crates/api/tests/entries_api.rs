//! Integration tests for `/api/v1/entries` and `/api/v1/emotions`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, insert_entry};
use moodlog_core::emotion::Emotion;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Test: listing, filtering and paging
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_entries_newest_first(pool: SqlitePool) {
    insert_entry(&pool, "old", Emotion::Joy, 0.5, 30).await;
    insert_entry(&pool, "middle", Emotion::Sadness, -0.5, 20).await;
    insert_entry(&pool, "new", Emotion::Joy, 0.5, 10).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/entries").await).await;
    let messages: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["message"].as_str().unwrap())
        .collect();

    assert_eq!(messages, vec!["new", "middle", "old"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_entries_filters_by_emotion_and_window(pool: SqlitePool) {
    insert_entry(&pool, "long ago", Emotion::Joy, 0.5, 24 * 20).await;
    insert_entry(&pool, "sad", Emotion::Sadness, -0.5, 5).await;
    insert_entry(&pool, "glad", Emotion::Joy, 0.5, 2).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/entries?emotion=joy").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/entries?emotion=JOY&days=7").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["message"], "glad");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/entries?limit=1&offset=1").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["message"], "sad");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_entries_rejects_bad_parameters(pool: SqlitePool) {
    for uri in [
        "/api/v1/entries?emotion=bored",
        "/api/v1/entries?days=0",
        "/api/v1/entries?days=366",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

// ---------------------------------------------------------------------------
// Test: single entry lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_entry_by_id(pool: SqlitePool) {
    let entry = insert_entry(&pool, "hello", Emotion::Trust, 0.2, 1).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/entries/{}", entry.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], entry.id);
    assert_eq!(json["data"]["emotion"], "trust");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_entry_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/entries/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "MoodEntry with id 999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_positive_entry_id_is_bad_request(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/entries/0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: emotion metadata
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn emotions_lists_every_label(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/emotions").await).await;
    let emotions = json["data"].as_array().unwrap();

    assert_eq!(emotions.len(), 11);
    let joy = emotions.iter().find(|e| e["label"] == "joy").unwrap();
    assert_eq!(joy["title"], "Joy");
    assert_eq!(joy["mood_score"], 2);
    assert!(joy["color"].as_str().unwrap().starts_with('#'));
}
