//! The emotion classifier seam.
//!
//! The built-in [`LexiconClassifier`] is always available. A hosted
//! pretrained model can be plugged in by implementing [`EmotionClassifier`]
//! (see the `moodlog-inference` crate).

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;

use crate::analyzer;
use crate::emotion::Emotion;

/// Name recorded for entries classified by the built-in analyzer.
pub const LEXICON_CLASSIFIER: &str = "lexicon";

/// A label decision produced by a classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub emotion: Emotion,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Per-label scores as reported by the classifier.
    pub scores: BTreeMap<Emotion, f64>,
}

/// Errors a classifier can report.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The classifier could not be reached or did not answer in time.
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    /// The classifier answered with something that cannot be interpreted.
    #[error("Invalid classifier response: {0}")]
    InvalidResponse(String),
}

/// Assigns an emotion label to free text.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Identifier stored alongside each entry (e.g. `lexicon`).
    fn name(&self) -> String;

    /// Classify `text`.
    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;
}

/// Classifier backed by the keyword/lexicon analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

#[async_trait]
impl EmotionClassifier for LexiconClassifier {
    fn name(&self) -> String {
        LEXICON_CLASSIFIER.to_string()
    }

    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let analysis = analyzer::analyze(text);
        Ok(Classification {
            emotion: analysis.primary_emotion,
            confidence: analysis.confidence,
            scores: analysis.emotion_scores,
        })
    }
}
