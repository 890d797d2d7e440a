//! Emotion labels and their per-label presentation data.
//!
//! The declaration order of [`Emotion::ALL`] is significant: keyword scoring
//! breaks ties by picking the label that appears first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Colour used for any label without an explicit palette entry.
pub const DEFAULT_EMOTION_COLOR: &str = "#808080";

/// A categorical emotion label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Anticipation,
    Trust,
    Love,
    Anxiety,
    Neutral,
}

impl Emotion {
    /// Every label, in tie-break order.
    pub const ALL: [Emotion; 11] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Anticipation,
        Emotion::Trust,
        Emotion::Love,
        Emotion::Anxiety,
        Emotion::Neutral,
    ];

    /// Canonical lower-case label, as stored in the database.
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Anticipation => "anticipation",
            Emotion::Trust => "trust",
            Emotion::Love => "love",
            Emotion::Anxiety => "anxiety",
            Emotion::Neutral => "neutral",
        }
    }

    /// Label with a leading capital, for chart legends and messages.
    pub fn title(self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Hex display colour.
    pub fn color(self) -> &'static str {
        match self {
            Emotion::Joy => "#FFD700",
            Emotion::Sadness => "#4169E1",
            Emotion::Anger => "#FF4500",
            Emotion::Fear => "#9370DB",
            Emotion::Surprise => "#FF69B4",
            Emotion::Disgust => "#8FBC8F",
            Emotion::Anticipation => "#FFA500",
            Emotion::Trust => "#20B2AA",
            Emotion::Love => "#FF1493",
            Emotion::Anxiety => "#DC143C",
            Emotion::Neutral => DEFAULT_EMOTION_COLOR,
        }
    }

    /// Mood score on a `-2..=2` scale, used by the heatmap.
    pub fn mood_score(self) -> i8 {
        match self {
            Emotion::Joy | Emotion::Love => 2,
            Emotion::Trust | Emotion::Anticipation => 1,
            Emotion::Neutral | Emotion::Surprise => 0,
            Emotion::Fear | Emotion::Anxiety | Emotion::Disgust => -1,
            Emotion::Sadness | Emotion::Anger => -2,
        }
    }

    /// Short affirmation matching the emotion.
    pub fn affirmation(self) -> &'static str {
        match self {
            Emotion::Joy => "I deserve happiness and allow myself to fully experience joy.",
            Emotion::Sadness => {
                "My feelings are valid, and it's okay to experience sadness as part of being human."
            }
            Emotion::Anger => {
                "I can feel anger without being controlled by it, and I choose healthy ways to express it."
            }
            Emotion::Fear => {
                "I am brave enough to face my fears, and I have overcome challenges before."
            }
            Emotion::Anxiety => {
                "I am safe in this moment, and I have the tools to manage my anxiety."
            }
            Emotion::Surprise => "I am adaptable and can handle unexpected situations with grace.",
            Emotion::Disgust => "I trust my instincts and honor my values and boundaries.",
            Emotion::Anticipation => {
                "I embrace the future with hope and excitement for what's to come."
            }
            Emotion::Trust => "I am worthy of trust and capable of making good decisions.",
            Emotion::Love => "I am deserving of love and capable of giving love freely.",
            Emotion::Neutral => "I appreciate this moment of calm and use it to center myself.",
        }
    }

    /// Whether this label counts as a negative emotion for support notes.
    pub fn is_distress(self) -> bool {
        matches!(self, Emotion::Sadness | Emotion::Fear | Emotion::Anxiety)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string is not a recognised emotion label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown emotion label '{0}'")]
pub struct UnknownEmotion(pub String);

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    /// Parse a canonical label or a common classifier alias, ignoring case
    /// and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let emotion = match normalized.as_str() {
            "joy" | "happy" | "happiness" | "joyful" => Emotion::Joy,
            "sadness" | "sad" | "grief" => Emotion::Sadness,
            "anger" | "angry" | "annoyance" => Emotion::Anger,
            "fear" | "fearful" | "scared" => Emotion::Fear,
            "surprise" | "surprised" => Emotion::Surprise,
            "disgust" | "disgusted" => Emotion::Disgust,
            "anticipation" | "optimism" | "excitement" => Emotion::Anticipation,
            "trust" | "confidence" => Emotion::Trust,
            "love" => Emotion::Love,
            "anxiety" | "worry" | "nervousness" => Emotion::Anxiety,
            "neutral" => Emotion::Neutral,
            _ => return Err(UnknownEmotion(s.to_string())),
        };
        Ok(emotion)
    }
}

/// All canonical labels joined for error messages.
pub fn valid_labels() -> String {
    Emotion::ALL
        .iter()
        .map(|e| e.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Colour for a stored label, falling back to grey for unknown labels.
pub fn color_for_label(label: &str) -> &'static str {
    label
        .parse::<Emotion>()
        .map(Emotion::color)
        .unwrap_or(DEFAULT_EMOTION_COLOR)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
