//! Handlers for the chat pipeline.
//!
//! `POST /chat` runs the whole pipeline: validate, classify, pick self-care
//! support, append the entry. `POST /analyze` classifies without storing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use moodlog_core::entries::{validate_message, MAX_MESSAGE_LENGTH_U64};
use moodlog_core::suggestions::{self, SupportPlan, CRISIS_RESOURCES};
use moodlog_db::models::mood_entry::{CreateMoodEntry, MoodEntry};
use moodlog_db::repositories::MoodEntryRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::{AppState, Classified};

/// Request body for `POST /chat` and `POST /analyze`.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = MAX_MESSAGE_LENGTH_U64))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub entry: MoodEntry,
    pub analysis: Classified,
    pub support: SupportPlan,
    /// Present when the message mentions self-harm.
    pub crisis_resources: Option<&'static [&'static str]>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: Classified,
    pub crisis_detected: bool,
}

fn check_request(input: &ChatRequest) -> AppResult<()> {
    input.validate()?;
    validate_message(&input.message)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// POST /chat
// ---------------------------------------------------------------------------

/// Analyse a message, store it and return tailored support.
pub async fn send_message(
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> AppResult<impl IntoResponse> {
    check_request(&input)?;

    let analysis = state.classify(&input.message).await;
    let support =
        suggestions::comprehensive_support(analysis.emotion, analysis.confidence, &mut rand::rng());
    let crisis = suggestions::detects_crisis(&input.message);

    let entry = MoodEntryRepo::create(
        &state.pool,
        &CreateMoodEntry {
            message: input.message,
            emotion: analysis.emotion,
            confidence: analysis.confidence,
            sentiment_score: analysis.sentiment_score,
            suggestion: Some(support.primary_suggestion.to_string()),
            classifier: analysis.classifier.clone(),
            created_at: None,
        },
    )
    .await?;

    tracing::info!(
        entry_id = entry.id,
        emotion = %analysis.emotion,
        confidence = analysis.confidence,
        classifier = %analysis.classifier,
        "Mood entry recorded",
    );
    if crisis {
        tracing::warn!(entry_id = entry.id, "Crisis language detected, sharing resources");
    }

    let response = ChatResponse {
        entry,
        analysis,
        support,
        crisis_resources: crisis.then_some(CRISIS_RESOURCES),
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

// ---------------------------------------------------------------------------
// POST /analyze
// ---------------------------------------------------------------------------

/// Classify a message without storing it.
pub async fn analyze_message(
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> AppResult<impl IntoResponse> {
    check_request(&input)?;

    let analysis = state.classify(&input.message).await;
    tracing::debug!(
        emotion = %analysis.emotion,
        classifier = %analysis.classifier,
        "Message analysed",
    );

    Ok(Json(DataResponse {
        data: AnalyzeResponse {
            crisis_detected: suggestions::detects_crisis(&input.message),
            analysis,
        },
    }))
}
