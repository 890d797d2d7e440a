//! Handlers for chart data. Every endpoint accepts `?days&emotion`.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};
use moodlog_core::charts::{self, ChartFilter};
use moodlog_core::entries::{parse_emotion_filter, resolve_days};
use moodlog_core::types::Timestamp;
use moodlog_db::models::mood_entry::MoodEntry;
use moodlog_db::repositories::MoodEntryRepo;

use crate::error::AppResult;
use crate::query::ChartParams;
use crate::response::DataResponse;
use crate::state::AppState;

const TIMELINE_DAYS: i64 = 7;
const DISTRIBUTION_DAYS: i64 = 7;
const HEATMAP_DAYS: i64 = 30;
const SENTIMENT_TREND_DAYS: i64 = 14;
const CONFIDENCE_DAYS: i64 = 14;

/// Validate the parameters and load the entries of the window.
async fn load(
    state: &AppState,
    params: &ChartParams,
    default_days: i64,
) -> AppResult<(Vec<MoodEntry>, ChartFilter, Timestamp)> {
    let filter = ChartFilter {
        days_back: resolve_days(params.days, default_days)?,
        emotion: parse_emotion_filter(params.emotion.as_deref())?,
    };
    let now = Utc::now();
    let entries =
        MoodEntryRepo::list_since(&state.pool, now - Duration::days(filter.days_back)).await?;
    Ok((entries, filter, now))
}

pub async fn get_timeline(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> AppResult<impl IntoResponse> {
    let (entries, filter, now) = load(&state, &params, TIMELINE_DAYS).await?;
    Ok(Json(DataResponse {
        data: charts::timeline(&entries, filter, now),
    }))
}

pub async fn get_distribution(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> AppResult<impl IntoResponse> {
    let (entries, filter, now) = load(&state, &params, DISTRIBUTION_DAYS).await?;
    Ok(Json(DataResponse {
        data: charts::distribution(&entries, filter, now),
    }))
}

pub async fn get_heatmap(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> AppResult<impl IntoResponse> {
    let (entries, filter, now) = load(&state, &params, HEATMAP_DAYS).await?;
    Ok(Json(DataResponse {
        data: charts::heatmap(&entries, filter, now, state.config.utc_offset),
    }))
}

pub async fn get_sentiment_trend(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> AppResult<impl IntoResponse> {
    let (entries, filter, now) = load(&state, &params, SENTIMENT_TREND_DAYS).await?;
    Ok(Json(DataResponse {
        data: charts::sentiment_trend(&entries, filter, now),
    }))
}

pub async fn get_confidence(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> AppResult<impl IntoResponse> {
    let (entries, filter, now) = load(&state, &params, CONFIDENCE_DAYS).await?;
    Ok(Json(DataResponse {
        data: charts::confidence(&entries, filter, now),
    }))
}
