//! Integration tests for `/api/v1/charts`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, insert_entry};
use moodlog_core::charts::NO_DATA_MESSAGE;
use moodlog_core::emotion::Emotion;
use sqlx::SqlitePool;

async fn seed(pool: &SqlitePool) {
    insert_entry(pool, "great walk in the park", Emotion::Joy, 0.6, 30).await;
    insert_entry(pool, "rough meeting", Emotion::Anger, -0.7, 20).await;
    insert_entry(pool, "dinner with friends", Emotion::Joy, 0.8, 10).await;
    insert_entry(pool, "a month ago", Emotion::Sadness, -0.4, 24 * 20).await;
}

// ---------------------------------------------------------------------------
// Test: empty windows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_charts_carry_no_data_message(pool: SqlitePool) {
    for (uri, title) in [
        ("/api/v1/charts/timeline", "Emotion Timeline"),
        ("/api/v1/charts/distribution", "Emotion Distribution"),
        ("/api/v1/charts/heatmap", "Mood Heatmap"),
        ("/api/v1/charts/sentiment-trend", "Sentiment Trend"),
        ("/api/v1/charts/confidence", "Confidence Analysis"),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["data"]["empty"], true, "{uri}");
        assert_eq!(json["data"]["message"], NO_DATA_MESSAGE, "{uri}");
        assert_eq!(json["data"]["title"], title, "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Test: populated charts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn timeline_groups_points_by_emotion(pool: SqlitePool) {
    seed(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/charts/timeline").await).await;
    let chart = &json["data"];

    assert_eq!(chart["title"], "Emotion Timeline - Last 7 Days");
    assert_eq!(chart["empty"], false);
    assert!(chart["message"].is_null());

    let series = chart["data"].as_array().unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["emotion"], "joy");
    assert_eq!(series[0]["label"], "Joy");
    assert_eq!(series[0]["points"].as_array().unwrap().len(), 2);
    assert_eq!(series[0]["points"][0]["preview"], "great walk in the park");
    assert_eq!(series[1]["emotion"], "anger");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn distribution_respects_emotion_filter(pool: SqlitePool) {
    seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/charts/distribution?days=30").await).await;
    let slices = json["data"]["data"].as_array().unwrap();
    let total: u64 = slices.iter().map(|s| s["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 4);
    assert_eq!(json["data"]["title"], "Emotion Distribution - Last 30 Days");

    let app = common::build_test_app(pool);
    let json =
        body_json(get(app, "/api/v1/charts/distribution?days=30&emotion=joy").await).await;
    let slices = json["data"]["data"].as_array().unwrap();
    assert_eq!(json["data"]["emotion"], "joy");
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0]["count"], 2);
    assert!((slices[0]["percentage"].as_f64().unwrap() - 100.0).abs() < 1e-9);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn heatmap_grid_matches_axes(pool: SqlitePool) {
    seed(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/charts/heatmap").await).await;
    let chart = &json["data"];
    assert_eq!(chart["title"], "Daily Mood Heatmap - Last 30 Days");

    let hours = chart["data"]["hours"].as_array().unwrap();
    let dates = chart["data"]["dates"].as_array().unwrap();
    let values = chart["data"]["values"].as_array().unwrap();

    assert!(!hours.is_empty());
    assert_eq!(values.len(), dates.len());
    assert!(values
        .iter()
        .all(|row| row.as_array().unwrap().len() == hours.len()));

    let filled: Vec<f64> = values
        .iter()
        .flat_map(|row| row.as_array().unwrap().iter().filter_map(|v| v.as_f64()))
        .collect();
    assert!(!filled.is_empty());
    assert!(filled.iter().all(|v| (-2.0..=2.0).contains(v)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sentiment_trend_includes_rolling_mean(pool: SqlitePool) {
    seed(&pool).await;
    insert_entry(&pool, "quiet evening", Emotion::Neutral, 0.2, 5).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/charts/sentiment-trend").await).await;
    let points = json["data"]["data"].as_array().unwrap();

    assert_eq!(json["data"]["title"], "Sentiment Trend - Last 14 Days");
    assert_eq!(points.len(), 4);
    assert!((points[0]["sentiment"].as_f64().unwrap() - 0.6).abs() < 1e-9);
    assert!(points[0]["rolling"].is_null());
    let middle = points[1]["rolling"].as_f64().unwrap();
    assert!((middle - (0.6 - 0.7 + 0.8) / 3.0).abs() < 1e-9);
    assert!(points[3]["rolling"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn confidence_boxes_per_emotion(pool: SqlitePool) {
    seed(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/charts/confidence").await).await;
    let boxes = json["data"]["data"].as_array().unwrap();

    assert_eq!(json["data"]["title"], "Emotion Detection Confidence - Last 14 Days");
    assert_eq!(boxes.len(), 2);
    assert_eq!(boxes[0]["emotion"], "joy");
    assert_eq!(boxes[0]["values"].as_array().unwrap().len(), 2);
    assert!((boxes[0]["median"].as_f64().unwrap() - 0.75).abs() < 1e-9);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn chart_rejects_unknown_emotion(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/charts/timeline?emotion=hungry").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
