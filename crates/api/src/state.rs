use std::collections::BTreeMap;
use std::sync::Arc;

use moodlog_core::analyzer::{self, EmotionAnalysis};
use moodlog_core::classifier::{EmotionClassifier, LEXICON_CLASSIFIER};
use moodlog_core::emotion::Emotion;
use moodlog_core::lexicon::SentimentScores;
use serde::Serialize;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: moodlog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Hosted classifier; the lexicon analyzer is used when absent or failing.
    pub classifier: Option<Arc<dyn EmotionClassifier>>,
}

/// The outcome of classifying one message.
#[derive(Debug, Clone, Serialize)]
pub struct Classified {
    pub emotion: Emotion,
    pub confidence: f64,
    pub sentiment_score: f64,
    pub sentiment: SentimentScores,
    pub emotion_scores: BTreeMap<Emotion, f64>,
    /// `lexicon` or `remote:<model>`.
    pub classifier: String,
    pub explanation: String,
}

impl AppState {
    /// Classify `text` with the hosted model when configured, falling back to
    /// the lexicon analyzer. Sentiment always comes from the lexicon scorer.
    pub async fn classify(&self, text: &str) -> Classified {
        let lexicon = analyzer::analyze(text);

        if let Some(remote) = &self.classifier {
            match remote.classify(text).await {
                Ok(result) => {
                    // Keyword matches describe the lexicon's pick, not the model's.
                    return Classified {
                        explanation: analyzer::describe_detection(
                            result.emotion,
                            result.confidence,
                            lexicon.sentiment_score,
                        ),
                        emotion: result.emotion,
                        confidence: result.confidence,
                        sentiment_score: lexicon.sentiment_score,
                        sentiment: lexicon.sentiment,
                        emotion_scores: result.scores,
                        classifier: remote.name(),
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        classifier = %remote.name(),
                        "Remote classifier failed, using lexicon analyzer",
                    );
                }
            }
        }

        Self::finish(lexicon, LEXICON_CLASSIFIER.to_string())
    }

    fn finish(analysis: EmotionAnalysis, classifier: String) -> Classified {
        Classified {
            explanation: analyzer::explain(&analysis),
            emotion: analysis.primary_emotion,
            confidence: analysis.confidence,
            sentiment_score: analysis.sentiment_score,
            sentiment: analysis.sentiment,
            emotion_scores: analysis.emotion_scores,
            classifier,
        }
    }
}
