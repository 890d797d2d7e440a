//! Repository for the `mood_entries` table.
//!
//! The table is append-only. There are no update or delete methods and
//! triggers reject such statements at the database level.

use chrono::Utc;
use moodlog_core::emotion::Emotion;
use moodlog_core::types::{DbId, Timestamp};
use sqlx::SqlitePool;

use crate::models::mood_entry::{CreateMoodEntry, MoodEntry};

/// Column list for `mood_entries` queries.
const COLUMNS: &str = "\
    id, message, emotion, confidence, sentiment_score, \
    suggestion, classifier, created_at";

/// Provides append and read operations for mood entries.
pub struct MoodEntryRepo;

impl MoodEntryRepo {
    /// Append a new entry, returning the full row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateMoodEntry,
    ) -> Result<MoodEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO mood_entries \
                (message, emotion, confidence, sentiment_score, suggestion, classifier, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MoodEntry>(&query)
            .bind(&input.message)
            .bind(input.emotion.label())
            .bind(input.confidence)
            .bind(input.sentiment_score)
            .bind(&input.suggestion)
            .bind(&input.classifier)
            .bind(input.created_at.unwrap_or_else(Utc::now))
            .fetch_one(pool)
            .await
    }

    /// Find an entry by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<MoodEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mood_entries WHERE id = ?");
        sqlx::query_as::<_, MoodEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List entries with optional emotion and start-time filters.
    ///
    /// Results are ordered newest-first.
    pub async fn list(
        pool: &SqlitePool,
        emotion: Option<Emotion>,
        since: Option<Timestamp>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MoodEntry>, sqlx::Error> {
        let mut conditions: Vec<&str> = Vec::new();
        if emotion.is_some() {
            conditions.push("emotion = ?");
        }
        if since.is_some() {
            conditions.push("created_at >= ?");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM mood_entries {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ? OFFSET ?"
        );

        let mut q = sqlx::query_as::<_, MoodEntry>(&query);
        if let Some(e) = emotion {
            q = q.bind(e.label());
        }
        if let Some(ts) = since {
            q = q.bind(ts);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// Entries recorded at or after `since`, oldest first.
    pub async fn list_since(
        pool: &SqlitePool,
        since: Timestamp,
    ) -> Result<Vec<MoodEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mood_entries WHERE created_at >= ? \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, MoodEntry>(&query)
            .bind(since)
            .fetch_all(pool)
            .await
    }

    /// Every entry, oldest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<MoodEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mood_entries ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, MoodEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Total number of entries.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM mood_entries")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// The most recently recorded entry.
    pub async fn latest(pool: &SqlitePool) -> Result<Option<MoodEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mood_entries ORDER BY created_at DESC, id DESC LIMIT 1"
        );
        sqlx::query_as::<_, MoodEntry>(&query)
            .fetch_optional(pool)
            .await
    }
}
