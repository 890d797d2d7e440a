//! Export of logged mood entries as CSV or JSON.

use std::str::FromStr;

use chrono::{FixedOffset, SecondsFormat};
use serde::Serialize;

use crate::emotion::Emotion;
use crate::error::CoreError;
use crate::stats::MoodSample;
use crate::types::Timestamp;

/// CSV header with the message column.
pub const CSV_HEADER_WITH_TEXT: &str = "timestamp,text,emotion,confidence,sentiment_score";

/// CSV header without the message column.
pub const CSV_HEADER: &str = "timestamp,emotion,confidence,sentiment_score";

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(CoreError::Validation(
                "Format must be 'csv' or 'json'".to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One exported row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    pub timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub emotion: Emotion,
    pub confidence: f64,
    pub sentiment_score: f64,
}

pub fn records<S: MoodSample>(entries: &[S], include_text: bool) -> Vec<ExportRecord> {
    entries
        .iter()
        .map(|e| ExportRecord {
            timestamp: e.recorded_at(),
            text: include_text.then(|| e.message().to_string()),
            emotion: e.emotion(),
            confidence: e.confidence(),
            sentiment_score: e.sentiment_score(),
        })
        .collect()
}

/// Escape a value for CSV: wrap in quotes if it contains comma, quote, or newline.
fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn to_csv(records: &[ExportRecord], include_text: bool) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(if include_text { CSV_HEADER_WITH_TEXT } else { CSV_HEADER }.to_string());

    for record in records {
        let mut row = vec![record
            .timestamp
            .to_rfc3339_opts(SecondsFormat::AutoSi, true)];
        if let Some(text) = &record.text {
            row.push(csv_escape(text));
        }
        row.push(record.emotion.label().to_string());
        row.push(record.confidence.to_string());
        row.push(record.sentiment_score.to_string());
        lines.push(row.join(","));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Encode entries in `format`. An empty entry list yields an empty body.
pub fn export<S: MoodSample>(
    entries: &[S],
    format: ExportFormat,
    include_text: bool,
) -> Result<String, CoreError> {
    if entries.is_empty() {
        return Ok(String::new());
    }
    let rows = records(entries, include_text);
    match format {
        ExportFormat::Csv => Ok(to_csv(&rows, include_text)),
        ExportFormat::Json => serde_json::to_string(&rows)
            .map_err(|e| CoreError::Internal(format!("Failed to encode export: {e}"))),
    }
}

/// Download file name, e.g. `mood_data_20240610_091500.csv`.
pub fn export_filename(format: ExportFormat, now: Timestamp) -> String {
    format!(
        "mood_data_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    pub total_entries: usize,
    /// Local date (`YYYY-MM-DD`) of the oldest entry.
    pub first_date: Option<String>,
    /// Local date (`YYYY-MM-DD`) of the newest entry.
    pub last_date: Option<String>,
    pub unique_emotions: usize,
}

pub fn summary<S: MoodSample>(entries: &[S], offset: FixedOffset) -> ExportSummary {
    let date = |ts: Timestamp| ts.with_timezone(&offset).format("%Y-%m-%d").to_string();

    let mut emotions: Vec<Emotion> = entries.iter().map(MoodSample::emotion).collect();
    emotions.sort();
    emotions.dedup();

    ExportSummary {
        total_entries: entries.len(),
        first_date: entries.iter().map(MoodSample::recorded_at).min().map(date),
        last_date: entries.iter().map(MoodSample::recorded_at).max().map(date),
        unique_emotions: emotions.len(),
    }
}
