pub mod charts;
pub mod chat;
pub mod dashboard;
pub mod entries;
pub mod export;
pub mod health;
pub mod support;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /chat                          analyze + store + support (POST)
/// /analyze                       analyze only (POST)
///
/// /entries                       list (?emotion&days&limit&offset)
/// /entries/{id}                  get
/// /emotions                      labels, colours, mood scores, affirmations
///
/// /dashboard/summary             total, recent trend, latest entry
/// /dashboard/stats               ?days (default 7)
/// /dashboard/patterns            ?days (default 30)
/// /dashboard/streaks             runs of identical emotions
/// /dashboard/insights            ?days (default 14)
///
/// /charts/timeline               ?days&emotion
/// /charts/distribution           ?days&emotion
/// /charts/heatmap                ?days&emotion
/// /charts/sentiment-trend        ?days&emotion
/// /charts/confidence             ?days&emotion
///
/// /export                        ?format=csv|json&include_text
/// /export/summary                totals and date range
///
/// /support/crisis                crisis resources
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Chat pipeline.
        .merge(chat::router())
        // Stored entries and label metadata.
        .merge(entries::router())
        // Mood tracking analytics.
        .nest("/dashboard", dashboard::router())
        // Chart data.
        .nest("/charts", charts::router())
        // Data export.
        .nest("/export", export::router())
        // Support resources.
        .nest("/support", support::router())
}
