//! Handlers for mood tracking analytics.
//!
//! Entries are loaded oldest first and handed to the pure functions in
//! `moodlog_core::stats` together with the current time and the configured
//! UTC offset.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};
use moodlog_core::emotion::Emotion;
use moodlog_core::entries::{
    resolve_days, DEFAULT_INSIGHT_DAYS, DEFAULT_PATTERN_DAYS, DEFAULT_STATS_DAYS,
    RECENT_TREND_WINDOW,
};
use moodlog_core::{stats, suggestions};
use moodlog_db::models::mood_entry::MoodEntry;
use moodlog_db::repositories::MoodEntryRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::DaysParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Quick stats shown next to the chat.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_entries: i64,
    /// Most common emotion among the latest entries.
    pub recent_trend: Option<Emotion>,
    pub latest_entry: Option<MoodEntry>,
    pub daily_affirmation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InsightList {
    pub days_back: i64,
    pub insights: Vec<String>,
}

// ---------------------------------------------------------------------------
// GET /dashboard/summary
// ---------------------------------------------------------------------------

pub async fn get_summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let total_entries = MoodEntryRepo::count(&state.pool).await?;

    let latest_entry = MoodEntryRepo::latest(&state.pool).await?;

    // Newest first from the repo; the stats functions expect oldest first.
    let mut recent =
        MoodEntryRepo::list(&state.pool, None, None, RECENT_TREND_WINDOW as i64, 0).await?;
    recent.reverse();
    let recent_trend = stats::recent_trend(&recent);

    Ok(Json(DataResponse {
        data: DashboardSummary {
            total_entries,
            recent_trend,
            latest_entry,
            daily_affirmation: suggestions::daily_affirmation(recent_trend),
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /dashboard/stats
// ---------------------------------------------------------------------------

pub async fn get_statistics(
    State(state): State<AppState>,
    Query(params): Query<DaysParams>,
) -> AppResult<impl IntoResponse> {
    let days = resolve_days(params.days, DEFAULT_STATS_DAYS)?;
    let now = Utc::now();
    let entries = MoodEntryRepo::list_since(&state.pool, now - Duration::days(days)).await?;

    let statistics = stats::statistics(&entries, days, now, state.config.utc_offset);
    Ok(Json(DataResponse { data: statistics }))
}

// ---------------------------------------------------------------------------
// GET /dashboard/patterns
// ---------------------------------------------------------------------------

pub async fn get_patterns(
    State(state): State<AppState>,
    Query(params): Query<DaysParams>,
) -> AppResult<impl IntoResponse> {
    let days = resolve_days(params.days, DEFAULT_PATTERN_DAYS)?;
    let now = Utc::now();
    let entries = MoodEntryRepo::list_since(&state.pool, now - Duration::days(days)).await?;

    let patterns = stats::patterns(&entries, days, now, state.config.utc_offset);
    Ok(Json(DataResponse { data: patterns }))
}

// ---------------------------------------------------------------------------
// GET /dashboard/streaks
// ---------------------------------------------------------------------------

pub async fn get_streaks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = MoodEntryRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse {
        data: stats::streaks(&entries),
    }))
}

// ---------------------------------------------------------------------------
// GET /dashboard/insights
// ---------------------------------------------------------------------------

pub async fn get_insights(
    State(state): State<AppState>,
    Query(params): Query<DaysParams>,
) -> AppResult<impl IntoResponse> {
    let days = resolve_days(params.days, DEFAULT_INSIGHT_DAYS)?;
    // Streak detection looks at the whole history.
    let entries = MoodEntryRepo::list_all(&state.pool).await?;

    let insights = stats::insights(&entries, days, Utc::now(), state.config.utc_offset);
    tracing::debug!(days, count = insights.len(), "Insights generated");

    Ok(Json(DataResponse {
        data: InsightList {
            days_back: days,
            insights,
        },
    }))
}
