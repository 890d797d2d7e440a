//! Handlers for stored mood entries and emotion label metadata.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};
use moodlog_core::emotion::Emotion;
use moodlog_core::entries::{
    clamp_limit, clamp_offset, parse_emotion_filter, resolve_days, DEFAULT_LIST_LIMIT,
    MAX_DAYS_BACK, MAX_LIST_LIMIT,
};
use moodlog_core::error::CoreError;
use moodlog_core::types::DbId;
use moodlog_db::repositories::MoodEntryRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::EntryListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Display metadata for one emotion label.
#[derive(Debug, Serialize)]
pub struct EmotionInfo {
    pub label: &'static str,
    pub title: String,
    pub color: &'static str,
    pub mood_score: i8,
    pub affirmation: &'static str,
}

// ---------------------------------------------------------------------------
// GET /entries
// ---------------------------------------------------------------------------

/// List entries newest first, optionally filtered by emotion and window.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<EntryListParams>,
) -> AppResult<impl IntoResponse> {
    let emotion = parse_emotion_filter(params.emotion.as_deref())?;
    // No `days` means the whole history.
    let since = params
        .days
        .map(|days| resolve_days(Some(days), MAX_DAYS_BACK))
        .transpose()?
        .map(|days| Utc::now() - Duration::days(days));
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let entries = MoodEntryRepo::list(&state.pool, emotion, since, limit, offset).await?;

    Ok(Json(DataResponse { data: entries }))
}

// ---------------------------------------------------------------------------
// GET /entries/{id}
// ---------------------------------------------------------------------------

/// Get a single entry by ID.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if id < 1 {
        return Err(AppError::BadRequest(format!(
            "Entry id must be positive, got {id}"
        )));
    }

    let entry = MoodEntryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MoodEntry",
            id,
        }))?;

    Ok(Json(DataResponse { data: entry }))
}

// ---------------------------------------------------------------------------
// GET /emotions
// ---------------------------------------------------------------------------

/// Every supported emotion label with its colour, mood score and affirmation.
pub async fn list_emotions() -> Json<DataResponse<Vec<EmotionInfo>>> {
    let emotions = Emotion::ALL
        .iter()
        .map(|e| EmotionInfo {
            label: e.label(),
            title: e.title(),
            color: e.color(),
            mood_score: e.mood_score(),
            affirmation: e.affirmation(),
        })
        .collect();

    Json(DataResponse { data: emotions })
}
