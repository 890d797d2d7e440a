//! Rule-based sentiment scoring over a built-in valence lexicon.
//!
//! Two complementary measures are produced and then averaged:
//!
//! - a VADER-style `compound` score (boosters, negation, caps emphasis,
//!   contrastive "but", exclamation marks, normalised into `[-1, 1]`);
//! - a mean `polarity` of the matched words with the analyzer's intensity
//!   modifiers applied, plus a `subjectivity` ratio.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Increment applied by a booster word ("very", "extremely", ...).
pub const BOOSTER_INCREMENT: f64 = 0.293;

/// Decrement applied by a dampener word ("slightly", "somewhat", ...).
pub const DAMPENER_DECREMENT: f64 = -0.293;

/// Extra valence for an ALL-CAPS lexicon word in mixed-case text.
pub const CAPS_INCREMENT: f64 = 0.733;

/// Scalar applied to the valence of a negated word.
pub const NEGATION_SCALAR: f64 = -0.74;

/// Per-exclamation-mark emphasis, applied to at most four marks.
pub const EXCLAMATION_INCREMENT: f64 = 0.292;

/// Normalisation constant for the compound score.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Largest absolute valence in the lexicon.
const MAX_VALENCE: f64 = 4.0;

/// Multipliers for intensity modifiers that directly precede a word.
///
/// Shared with the keyword analyzer. Ordered; the first match wins.
pub const INTENSITY_MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("extremely", 2.0),
    ("really", 1.3),
    ("quite", 1.2),
    ("somewhat", 0.8),
    ("slightly", 0.6),
    ("a bit", 0.7),
    ("incredibly", 1.8),
    ("totally", 1.6),
    ("completely", 1.7),
];

const BOOSTERS: &[&str] = &[
    "absolutely", "amazingly", "completely", "deeply", "enormously", "entirely",
    "especially", "exceptionally", "extremely", "fully", "greatly", "highly",
    "hugely", "incredibly", "intensely", "quite", "really", "remarkably", "so",
    "substantially", "super", "thoroughly", "totally", "tremendously", "truly",
    "utterly", "very",
];

const DAMPENERS: &[&str] = &[
    "barely", "hardly", "kinda", "less", "little", "marginally", "occasionally",
    "partly", "scarcely", "slightly", "somewhat",
];

const NEGATORS: &[&str] = &[
    "aint", "cannot", "cant", "dont", "doesnt", "didnt", "isnt", "wasnt",
    "nor", "neither", "never", "no", "nobody", "none", "nope", "not", "nothing",
    "nowhere", "without", "wont", "shouldnt", "wouldnt", "couldnt",
];

/// Word -> valence in `-4.0..=4.0`.
const VALENCES: &[(&str, f64)] = &[
    // positive
    ("adore", 2.8), ("affectionate", 2.2), ("amazed", 2.2), ("amazing", 2.8),
    ("appreciate", 1.7), ("assured", 1.6), ("awesome", 3.1), ("beautiful", 2.9),
    ("best", 3.2), ("better", 1.9), ("blessed", 2.9), ("brave", 2.4),
    ("calm", 1.3), ("capable", 1.6), ("care", 2.2), ("caring", 2.2),
    ("certain", 1.1), ("cheerful", 2.5), ("cherish", 2.4), ("comfortable", 1.5),
    ("confident", 2.2), ("content", 1.5), ("cool", 1.3), ("delighted", 3.2),
    ("devoted", 1.7), ("eager", 1.5), ("elated", 3.2), ("enjoy", 2.2),
    ("excellent", 2.7), ("excited", 1.4), ("exciting", 2.2), ("fantastic", 2.6),
    ("faithful", 1.9), ("fine", 0.8), ("fun", 2.3), ("glad", 2.0),
    ("good", 1.9), ("grateful", 2.0), ("great", 3.1), ("happy", 2.7),
    ("hope", 1.9), ("hopeful", 2.3), ("joy", 2.8), ("joyful", 2.9),
    ("kind", 2.4), ("like", 1.5), ("love", 3.2), ("loved", 2.9),
    ("lovely", 2.8), ("nice", 1.8), ("optimistic", 2.2), ("peaceful", 2.2),
    ("pleased", 1.9), ("proud", 2.1), ("relaxed", 2.2), ("relieved", 1.5),
    ("romantic", 2.3), ("safe", 1.9), ("secure", 1.4), ("smile", 1.5),
    ("strong", 2.3), ("success", 2.7), ("support", 1.7), ("tender", 0.8),
    ("thankful", 2.7), ("thrilled", 3.0), ("trust", 2.3), ("trusting", 1.7),
    ("wonderful", 2.7), ("yay", 2.4),
    // negative
    ("afraid", -2.2), ("agitated", -2.0), ("alone", -1.0), ("angry", -2.3),
    ("annoyed", -1.6), ("anxious", -1.0), ("apprehensive", -1.1), ("appalled", -2.0),
    ("ashamed", -2.1), ("awful", -2.0), ("bad", -2.5), ("bewildered", -1.4),
    ("broken", -2.1), ("cry", -2.1), ("crying", -2.1), ("dejected", -2.2),
    ("depressed", -2.3), ("desperate", -1.3), ("devastated", -3.1), ("disappointed", -1.9),
    ("disgusted", -2.4), ("down", -0.9), ("downhearted", -2.3), ("dread", -2.4),
    ("exhausted", -1.5), ("failure", -2.3), ("fear", -2.2), ("fearful", -2.2),
    ("frightened", -1.9), ("frustrated", -2.4), ("furious", -2.7), ("gloomy", -1.8),
    ("guilty", -1.8), ("hate", -2.7), ("hopeless", -2.0), ("horrible", -2.5),
    ("hurt", -2.4), ("irritated", -1.8), ("lonely", -1.5), ("lost", -1.3),
    ("livid", -2.5), ("mad", -2.2), ("melancholy", -1.9), ("miserable", -2.2),
    ("nauseated", -1.8), ("nervous", -1.1), ("outraged", -2.3), ("overwhelmed", -1.5),
    ("pain", -2.3), ("panicked", -2.1), ("pissed", -3.2), ("rage", -2.6),
    ("repulsed", -2.2), ("revolted", -2.3), ("restless", -1.1), ("sad", -2.1),
    ("scared", -1.9), ("sick", -2.3), ("sickened", -2.2), ("sorrowful", -2.2),
    ("stressed", -1.4), ("struggling", -1.5), ("tense", -1.4), ("terrible", -2.1),
    ("terrified", -3.0), ("tired", -1.9), ("troubled", -1.6), ("ugly", -2.3),
    ("uneasy", -1.6), ("unhappy", -1.8), ("upset", -1.6), ("useless", -1.8),
    ("worried", -1.2), ("worse", -2.1), ("worst", -3.1), ("worthless", -1.9),
];

static VALENCE_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| VALENCES.iter().copied().collect());

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z']+").expect("word regex is valid"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Sentiment measures for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentimentScores {
    /// VADER-style normalised score in `[-1, 1]`.
    pub compound: f64,
    /// Proportion of positive weight.
    pub pos: f64,
    /// Proportion of negative weight.
    pub neg: f64,
    /// Proportion of neutral tokens.
    pub neu: f64,
    /// Mean matched valence in `[-1, 1]`.
    pub polarity: f64,
    /// Share of tokens carrying valence, in `[0, 1]`.
    pub subjectivity: f64,
    /// `(polarity + compound) / 2`.
    pub combined: f64,
}

/// A word token: original spelling plus a normalised lookup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub raw: String,
    pub lower: String,
}

impl Token {
    /// Lower-cased form with apostrophes removed ("don't" -> "dont").
    fn bare(&self) -> String {
        self.lower.replace('\'', "")
    }

    fn is_all_caps(&self) -> bool {
        self.raw.chars().any(|c| c.is_ascii_alphabetic())
            && self
                .raw
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .all(|c| c.is_ascii_uppercase())
    }
}

// ---------------------------------------------------------------------------
// Tokenisation and lookups
// ---------------------------------------------------------------------------

/// Split text into word tokens, discarding punctuation and digits.
pub fn tokenize(text: &str) -> Vec<Token> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(|w| Token {
            raw: w.to_string(),
            lower: w.to_lowercase(),
        })
        .collect()
}

/// Lexicon valence of a lower-case word, if it has one.
pub fn valence(word: &str) -> Option<f64> {
    VALENCE_MAP.get(word).copied()
}

fn is_negator(token: &Token) -> bool {
    let bare = token.bare();
    token.lower.ends_with("n't") || NEGATORS.contains(&bare.as_str())
}

fn booster_scalar(word: &str) -> Option<f64> {
    if BOOSTERS.contains(&word) {
        Some(BOOSTER_INCREMENT)
    } else if DAMPENERS.contains(&word) {
        Some(DAMPENER_DECREMENT)
    } else {
        None
    }
}

/// Multiplier of an intensity modifier ending just before `index`.
///
/// Checks two-word modifiers ("a bit") as well as single words.
pub fn modifier_before(tokens: &[&str], index: usize) -> Option<f64> {
    INTENSITY_MODIFIERS.iter().find_map(|(modifier, multiplier)| {
        let parts: Vec<&str> = modifier.split(' ').collect();
        if index < parts.len() {
            return None;
        }
        let start = index - parts.len();
        (tokens[start..index] == parts[..]).then_some(*multiplier)
    })
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score the sentiment of `text`.
///
/// Text with no word tokens scores zero on every measure.
pub fn score(text: &str) -> SentimentScores {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return SentimentScores::default();
    }

    let mixed_case = !tokens.iter().all(Token::is_all_caps);
    let mut sentiments = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        let word = token.lower.as_str();
        let Some(base) = valence(word) else {
            sentiments.push(0.0);
            continue;
        };

        let mut value = base;
        if mixed_case && token.is_all_caps() {
            value += CAPS_INCREMENT.copysign(base);
        }

        for distance in 1..=3usize {
            if i < distance {
                break;
            }
            let previous = &tokens[i - distance];
            if let Some(scalar) = booster_scalar(&previous.lower) {
                let decay = match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
                value += scalar * base.signum() * decay;
            }
        }

        let negated = (1..=3usize)
            .filter(|d| i >= *d)
            .any(|d| is_negator(&tokens[i - d]));
        if negated {
            value *= NEGATION_SCALAR;
        }

        sentiments.push(value);
    }

    if let Some(but_index) = tokens.iter().position(|t| t.lower == "but") {
        for (i, s) in sentiments.iter_mut().enumerate() {
            if i < but_index {
                *s *= 0.5;
            } else if i > but_index {
                *s *= 1.5;
            }
        }
    }

    let exclamations = text.chars().filter(|c| *c == '!').count().min(4) as f64;
    let emphasis = exclamations * EXCLAMATION_INCREMENT;

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);

    let (pos, neg, neu) = proportions(&sentiments, emphasis);
    let (polarity, subjectivity) = polarity_and_subjectivity(&tokens);

    SentimentScores {
        compound,
        pos,
        neg,
        neu,
        polarity,
        subjectivity,
        combined: (polarity + compound) / 2.0,
    }
}

fn proportions(sentiments: &[f64], emphasis: f64) -> (f64, f64, f64) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for s in sentiments {
        if *s > 0.0 {
            pos_sum += s + 1.0;
        } else if *s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    if total == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (pos_sum / total, neg_sum.abs() / total, neu_count / total)
}

fn polarity_and_subjectivity(tokens: &[Token]) -> (f64, f64) {
    let words: Vec<&str> = tokens.iter().map(|t| t.lower.as_str()).collect();
    let mut matched = Vec::new();

    for (i, word) in words.iter().enumerate() {
        let Some(base) = valence(word) else {
            continue;
        };
        let mut value = base / MAX_VALENCE;
        if let Some(multiplier) = modifier_before(&words, i) {
            value *= multiplier;
        }
        if i > 0 && is_negator(&tokens[i - 1]) {
            value *= -0.5;
        }
        matched.push(value.clamp(-1.0, 1.0));
    }

    if matched.is_empty() {
        return (0.0, 0.0);
    }
    let polarity = matched.iter().sum::<f64>() / matched.len() as f64;
    let subjectivity = (matched.len() as f64 / tokens.len() as f64).clamp(0.0, 1.0);
    (polarity.clamp(-1.0, 1.0), subjectivity)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
