//! [`EmotionClassifier`] backed by a hosted pretrained model.

use std::collections::BTreeMap;

use async_trait::async_trait;
use moodlog_core::classifier::{Classification, ClassifierError, EmotionClassifier};
use moodlog_core::emotion::Emotion;

use crate::api::{InferenceApi, InferenceError, LabelScore};

/// Prefix of the classifier name stored with each entry.
pub const REMOTE_PREFIX: &str = "remote";

pub struct RemoteClassifier {
    api: InferenceApi,
}

impl RemoteClassifier {
    pub fn new(api: InferenceApi) -> Self {
        Self { api }
    }
}

impl From<InferenceError> for ClassifierError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Request(e) => ClassifierError::Unavailable(e.to_string()),
            InferenceError::ApiError { status, body } => {
                ClassifierError::Unavailable(format!("status {status}: {body}"))
            }
            InferenceError::EmptyResponse => {
                ClassifierError::InvalidResponse("no label scores".to_string())
            }
        }
    }
}

/// Map raw model labels onto [`Emotion`]s.
///
/// The model's top label decides the emotion and must be recognised. The
/// remaining labels only feed the score map: unknown ones are skipped and
/// aliases of the same emotion keep their highest score.
pub fn to_classification(scores: &[LabelScore]) -> Result<Classification, ClassifierError> {
    let top = scores
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| ClassifierError::InvalidResponse("no label scores".to_string()))?;
    let emotion = top.label.parse::<Emotion>().map_err(|_| {
        ClassifierError::InvalidResponse(format!(
            "top label '{}' ({:.2}) is not a known emotion",
            top.label, top.score
        ))
    })?;

    let mut mapped: BTreeMap<Emotion, f64> = BTreeMap::new();
    for LabelScore { label, score } in scores {
        match label.parse::<Emotion>() {
            Ok(emotion) => {
                let slot = mapped.entry(emotion).or_insert(f64::MIN);
                *slot = slot.max(*score);
            }
            Err(_) => tracing::debug!(label = %label, "Skipping unknown model label"),
        }
    }

    Ok(Classification {
        emotion,
        confidence: top.score.clamp(0.0, 1.0),
        scores: mapped,
    })
}

#[async_trait]
impl EmotionClassifier for RemoteClassifier {
    fn name(&self) -> String {
        format!("{REMOTE_PREFIX}:{}", self.api.model())
    }

    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let scores = self.api.classify(text).await?;
        to_classification(&scores)
    }
}
