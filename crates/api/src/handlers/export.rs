//! Handlers for data export.

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use moodlog_core::export::{self, ExportFormat};
use moodlog_db::repositories::MoodEntryRepo;

use crate::error::AppResult;
use crate::query::ExportParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /export
// ---------------------------------------------------------------------------

/// Download every entry as CSV (default) or JSON.
pub async fn export_entries(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> AppResult<impl IntoResponse> {
    let format = match params.format.as_deref() {
        Some(raw) => raw.parse::<ExportFormat>()?,
        None => ExportFormat::Csv,
    };
    let include_text = params.include_text.unwrap_or(true);

    let entries = MoodEntryRepo::list_all(&state.pool).await?;
    let body = export::export(&entries, format, include_text)?;
    let filename = export::export_filename(format, Utc::now());

    tracing::info!(
        count = entries.len(),
        format = format.extension(),
        include_text,
        "Mood data exported",
    );

    Ok((
        [
            (CONTENT_TYPE, format.content_type().to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

// ---------------------------------------------------------------------------
// GET /export/summary
// ---------------------------------------------------------------------------

pub async fn export_summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = MoodEntryRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse {
        data: export::summary(&entries, state.config.utc_offset),
    }))
}
