//! Keyword and sentiment based emotion analysis.
//!
//! The analyzer first looks for emotion keywords (word-bounded, with
//! intensity modifiers) and falls back to mapping the lexicon sentiment onto
//! an emotion when no keyword matches.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::emotion::Emotion;
use crate::lexicon::{self, SentimentScores};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Confidence reported for empty input.
pub const EMPTY_INPUT_CONFIDENCE: f64 = 0.5;

/// Lower bound of lexicon confidence.
pub const MIN_CONFIDENCE: f64 = 0.3;

/// Upper bound of lexicon confidence.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Keywords per emotion. Multi-word entries match as whole phrases.
const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Joy,
        &[
            "happy", "joyful", "excited", "cheerful", "delighted", "elated", "thrilled",
            "content", "pleased", "glad",
        ],
    ),
    (
        Emotion::Sadness,
        &[
            "sad", "depressed", "melancholy", "gloomy", "dejected", "downhearted",
            "sorrowful", "unhappy", "blue", "down",
        ],
    ),
    (
        Emotion::Anger,
        &[
            "angry", "furious", "mad", "irritated", "annoyed", "rage", "outraged", "livid",
            "frustrated", "pissed",
        ],
    ),
    (
        Emotion::Fear,
        &[
            "afraid", "scared", "frightened", "terrified", "anxious", "worried", "nervous",
            "panicked", "fearful", "apprehensive",
        ],
    ),
    (
        Emotion::Surprise,
        &[
            "surprised", "shocked", "amazed", "astonished", "stunned", "bewildered",
            "startled", "astounded",
        ],
    ),
    (
        Emotion::Disgust,
        &[
            "disgusted", "revolted", "repulsed", "nauseated", "sickened", "appalled",
            "repelled",
        ],
    ),
    (
        Emotion::Anticipation,
        &[
            "excited", "eager", "hopeful", "expectant", "anticipating", "looking forward",
            "optimistic",
        ],
    ),
    (
        Emotion::Trust,
        &[
            "confident", "secure", "trusting", "faithful", "assured", "certain", "believing",
        ],
    ),
    (
        Emotion::Love,
        &[
            "love", "adore", "cherish", "affectionate", "devoted", "caring", "tender",
            "romantic",
        ],
    ),
    (
        Emotion::Anxiety,
        &[
            "anxious", "stressed", "overwhelmed", "tense", "uneasy", "restless", "agitated",
            "troubled",
        ],
    ),
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Result of analysing one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionAnalysis {
    pub primary_emotion: Emotion,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Combined sentiment in `[-1, 1]`.
    pub sentiment_score: f64,
    /// Keyword score per emotion. Empty for empty input.
    pub emotion_scores: BTreeMap<Emotion, f64>,
    pub sentiment: SentimentScores,
}

impl EmotionAnalysis {
    /// Emotions whose keyword score is positive, in label order.
    pub fn keyword_matches(&self) -> Vec<Emotion> {
        self.emotion_scores
            .iter()
            .filter(|(_, score)| **score > 0.0)
            .map(|(emotion, _)| *emotion)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Lower-case and collapse runs of whitespace.
pub fn preprocess(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Score each emotion by the keywords present in `text`.
///
/// Every keyword found contributes `1.0`, multiplied by the intensity
/// modifier directly in front of it when there is one. A keyword counts once
/// no matter how often it occurs.
pub fn detect_keywords(text: &str) -> BTreeMap<Emotion, f64> {
    let cleaned = preprocess(text);
    let tokens = lexicon::tokenize(&cleaned);
    let words: Vec<&str> = tokens.iter().map(|t| t.lower.as_str()).collect();

    EMOTION_KEYWORDS
        .iter()
        .map(|(emotion, keywords)| {
            let score = keywords
                .iter()
                .filter_map(|keyword| keyword_weight(&words, keyword))
                .sum();
            (*emotion, score)
        })
        .collect()
}

/// Weight of a single keyword, or `None` when it does not occur.
fn keyword_weight(words: &[&str], keyword: &str) -> Option<f64> {
    let phrase: Vec<&str> = keyword.split(' ').collect();
    if phrase.len() > words.len() {
        return None;
    }

    let positions: Vec<usize> = (0..=words.len() - phrase.len())
        .filter(|&start| words[start..start + phrase.len()] == phrase[..])
        .collect();
    if positions.is_empty() {
        return None;
    }

    let multiplier = positions
        .iter()
        .find_map(|&start| lexicon::modifier_before(words, start))
        .unwrap_or(1.0);
    Some(multiplier)
}

/// Map sentiment scores to an emotion when no keyword matched.
pub fn classify_from_sentiment(sentiment: &SentimentScores) -> Emotion {
    let score = sentiment.combined;
    if score > 0.5 {
        Emotion::Joy
    } else if score < -0.5 {
        Emotion::Sadness
    } else if score > 0.1 {
        Emotion::Anticipation
    } else if score < -0.1 {
        if sentiment.neg > 0.3 {
            if sentiment.compound < -0.3 {
                Emotion::Anger
            } else {
                Emotion::Fear
            }
        } else {
            Emotion::Sadness
        }
    } else if sentiment.neu > 0.7 {
        Emotion::Trust
    } else {
        Emotion::Anticipation
    }
}

/// Combine keyword strength, sentiment magnitude and subjectivity.
pub fn confidence(
    emotion_scores: &BTreeMap<Emotion, f64>,
    primary: Emotion,
    sentiment: &SentimentScores,
) -> f64 {
    let keyword_score = emotion_scores.get(&primary).copied().unwrap_or(0.0);
    let total = 0.4
        + (keyword_score * 0.2).min(0.3)
        + sentiment.combined.abs() * 0.2
        + sentiment.subjectivity * 0.1;
    total.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Analyse a message end to end.
pub fn analyze(text: &str) -> EmotionAnalysis {
    if text.trim().is_empty() {
        return EmotionAnalysis {
            primary_emotion: Emotion::Neutral,
            confidence: EMPTY_INPUT_CONFIDENCE,
            sentiment_score: 0.0,
            emotion_scores: BTreeMap::new(),
            sentiment: SentimentScores::default(),
        };
    }

    let sentiment = lexicon::score(text);
    let emotion_scores = detect_keywords(text);

    // First emotion in label order wins ties.
    let strongest = emotion_scores
        .iter()
        .fold(None::<(Emotion, f64)>, |best, (emotion, score)| match best {
            Some((_, best_score)) if *score <= best_score => best,
            _ => Some((*emotion, *score)),
        });

    let primary_emotion = match strongest {
        Some((emotion, score)) if score > 0.0 => emotion,
        _ => classify_from_sentiment(&sentiment),
    };

    EmotionAnalysis {
        primary_emotion,
        confidence: confidence(&emotion_scores, primary_emotion, &sentiment),
        sentiment_score: sentiment.combined,
        emotion_scores,
        sentiment,
    }
}

/// Describe how an analysis was reached, in plain language.
pub fn explain(analysis: &EmotionAnalysis) -> String {
    let mut explanation = describe_detection(
        analysis.primary_emotion,
        analysis.confidence,
        analysis.sentiment_score,
    );

    let matches = analysis.keyword_matches();
    if !matches.is_empty() {
        let labels: Vec<&str> = matches.iter().map(|e| e.label()).collect();
        explanation.push_str(&format!(
            " Keywords associated with {} were found.",
            labels.join(", ")
        ));
    }
    explanation
}

/// Detected emotion, confidence and sentiment polarity as two sentences.
///
/// Used on its own when the emotion came from a classifier other than the
/// keyword analyzer.
pub fn describe_detection(emotion: Emotion, confidence: f64, sentiment_score: f64) -> String {
    let polarity = if sentiment_score > 0.3 {
        "positive"
    } else if sentiment_score < -0.3 {
        "negative"
    } else {
        "neutral"
    };
    format!(
        "I detected {emotion} with {:.1}% confidence. The text has a {polarity} sentiment.",
        confidence * 100.0
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
