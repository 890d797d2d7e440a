//! Mood entry entity model and DTOs.

use moodlog_core::emotion::Emotion;
use moodlog_core::stats::MoodSample;
use moodlog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `mood_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MoodEntry {
    pub id: DbId,
    pub message: String,
    pub emotion: String,
    pub confidence: f64,
    pub sentiment_score: f64,
    pub suggestion: Option<String>,
    pub classifier: String,
    pub created_at: Timestamp,
}

impl MoodSample for MoodEntry {
    /// Unknown labels cannot be stored (CHECK constraint); neutral is the
    /// fallback for rows written by a future schema.
    fn emotion(&self) -> Emotion {
        self.emotion.parse().unwrap_or(Emotion::Neutral)
    }

    fn confidence(&self) -> f64 {
        self.confidence
    }

    fn sentiment_score(&self) -> f64 {
        self.sentiment_score
    }

    fn recorded_at(&self) -> Timestamp {
        self.created_at
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// DTO for appending a mood entry.
#[derive(Debug, Clone)]
pub struct CreateMoodEntry {
    pub message: String,
    pub emotion: Emotion,
    pub confidence: f64,
    pub sentiment_score: f64,
    pub suggestion: Option<String>,
    pub classifier: String,
    /// Defaults to the current time when `None`.
    pub created_at: Option<Timestamp>,
}
