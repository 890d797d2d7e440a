//! Self-care suggestions, activities, affirmations and crisis resources.
//!
//! Picks are random; every function takes the RNG explicitly so callers (and
//! tests) control the source.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Serialize;

use crate::emotion::Emotion;

/// Returned when no suggestion list exists for an emotion.
pub const FALLBACK_SUGGESTION: &str = "Take a moment to acknowledge your feelings. Sometimes just recognizing how we feel is the first step to understanding ourselves better.";

/// Number of activities offered per response.
pub const ACTIVITIES_PER_RESPONSE: usize = 2;

/// Crisis helplines and reassurance shown when distress phrases appear.
pub const CRISIS_RESOURCES: &[&str] = &[
    "If you're having thoughts of self-harm, please reach out to a crisis helpline immediately.",
    "Crisis Text Line: Text HOME to 741741",
    "National Suicide Prevention Lifeline: 988",
    "Remember: You matter, and help is available.",
];

/// Phrases that trigger the crisis resources, matched on lower-cased text.
const CRISIS_PHRASES: &[&str] = &[
    "kill myself",
    "end my life",
    "suicide",
    "suicidal",
    "self-harm",
    "self harm",
    "hurt myself",
    "want to die",
    "no reason to live",
];

fn suggestions_for(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Joy => &[
            "That's wonderful! Consider sharing your happiness with someone special.",
            "Great to hear you're feeling good! Maybe try a new activity while you're in this positive mood.",
            "Your joy is contagious! Consider doing something creative to express these positive feelings.",
            "Fantastic! Take a moment to appreciate what's bringing you joy today.",
            "Love the positive energy! Maybe write down what's making you happy to remember later.",
            "Wonderful news! Consider spreading some of that joy by helping someone else today.",
        ],
        Emotion::Sadness => &[
            "It's okay to feel sad sometimes. Try reaching out to a friend or family member for support.",
            "Consider gentle activities like listening to soothing music or taking a warm bath.",
            "Remember that sadness is temporary. Try journaling about your feelings to process them.",
            "Be kind to yourself today. Maybe watch a comforting movie or read an uplifting book.",
            "Consider going for a gentle walk in nature - fresh air can help lift your spirits.",
            "It's important to acknowledge your feelings. Consider talking to someone you trust about how you're feeling.",
        ],
        Emotion::Anger => &[
            "Take deep breaths and count to ten before reacting to anything.",
            "Try some physical exercise to channel that energy constructively - maybe a walk or workout.",
            "Consider writing down what's bothering you to help process these feelings.",
            "Step away from the situation if possible and return when you feel calmer.",
            "Try progressive muscle relaxation or meditation to help release tension.",
            "Remember that it's okay to feel angry, but focus on healthy ways to express it.",
        ],
        Emotion::Fear => &[
            "Fear is natural. Try some deep breathing exercises to help calm your nervous system.",
            "Consider breaking down what you're afraid of into smaller, manageable parts.",
            "Remember past times when you overcame challenges - you're stronger than you think.",
            "Try grounding techniques: name 5 things you can see, 4 you can touch, 3 you can hear.",
            "Consider talking to someone you trust about your fears - sharing can help reduce their power.",
            "Focus on what you can control in the situation, rather than what you can't.",
        ],
        Emotion::Anxiety => &[
            "Try the 4-7-8 breathing technique: breathe in for 4, hold for 7, exhale for 8.",
            "Ground yourself by focusing on your physical senses - what can you see, hear, feel right now?",
            "Consider gentle movement like stretching or yoga to help release physical tension.",
            "Remember that anxiety often involves worrying about future events - try to focus on the present moment.",
            "Consider limiting caffeine today and make sure you're staying hydrated.",
            "Progressive muscle relaxation can help - tense and release each muscle group slowly.",
        ],
        Emotion::Surprise => &[
            "Embrace the unexpected! Sometimes surprises lead to wonderful new experiences.",
            "Take a moment to process what just happened before making any big decisions.",
            "Surprise can be energizing - consider channeling that energy into something positive.",
            "It's okay to feel unsettled by unexpected events. Give yourself time to adjust.",
            "Consider sharing your surprise with someone - sometimes talking it through helps.",
            "Use this moment of surprise as an opportunity to practice adaptability.",
        ],
        Emotion::Disgust => &[
            "It's okay to feel disgusted by things that don't align with your values.",
            "Consider removing yourself from the situation if possible, at least temporarily.",
            "Try to understand what specifically is bothering you about this situation.",
            "Focus on things that align with your values and bring you peace.",
            "Consider whether this feeling is pointing to something important about your boundaries.",
            "Sometimes disgust helps us identify what we don't want - use it as guidance.",
        ],
        Emotion::Anticipation => &[
            "Channel that excited energy into preparation for what's coming!",
            "Try to stay present while also looking forward to what's ahead.",
            "Consider making a plan for the thing you're anticipating to feel more prepared.",
            "Use this positive energy to tackle other tasks while you're feeling motivated.",
            "Share your excitement with someone who will celebrate with you!",
            "Remember to enjoy the anticipation itself - it's part of the joy of the experience.",
        ],
        Emotion::Trust => &[
            "It's wonderful that you're feeling secure and confident. Embrace that feeling!",
            "Consider using this sense of trust to try something new or take a positive risk.",
            "Your trust in yourself and others is a strength - acknowledge that about yourself.",
            "Maybe use this confident feeling to reach out to someone or strengthen a relationship.",
            "Trust is built over time - appreciate the relationships and experiences that have led to this feeling.",
            "Consider how you can extend this trust and confidence to other areas of your life.",
        ],
        Emotion::Love => &[
            "Love is a beautiful emotion! Consider expressing your love to those who matter to you.",
            "Take time to appreciate the relationships and experiences that bring love into your life.",
            "Consider doing something kind for the person or thing you love.",
            "Self-love is important too - make sure you're being kind and compassionate to yourself.",
            "Love multiplies when shared - consider how you can spread more love today.",
            "Cherish this feeling and maybe write down what you love and why.",
        ],
        Emotion::Neutral => &[
            "A calm, neutral state can be very peaceful. Enjoy this moment of balance.",
            "Consider using this stable emotional state to plan or organize something important.",
            "Neutral feelings are completely valid - not every moment needs to be intense.",
            "Maybe this is a good time for reflection or meditation.",
            "Consider doing something small that usually brings you joy.",
            "Use this calm moment to check in with yourself - how are you really doing overall?",
        ],
    }
}

/// Activity category offered for an emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Positive,
    Negative,
    Energy,
    Calm,
}

impl ActivityCategory {
    /// Category for an emotion. Positive and negative take precedence over
    /// the energy/calm split.
    pub fn for_emotion(emotion: Emotion) -> Self {
        match emotion {
            Emotion::Joy | Emotion::Love | Emotion::Trust | Emotion::Anticipation => {
                ActivityCategory::Positive
            }
            Emotion::Sadness
            | Emotion::Anger
            | Emotion::Fear
            | Emotion::Anxiety
            | Emotion::Disgust => ActivityCategory::Negative,
            Emotion::Surprise => ActivityCategory::Energy,
            Emotion::Neutral => ActivityCategory::Calm,
        }
    }

    pub fn activities(self) -> &'static [&'static str] {
        match self {
            ActivityCategory::Positive => &[
                "gratitude journaling",
                "creative expression",
                "connecting with loved ones",
                "trying something new",
            ],
            ActivityCategory::Negative => &[
                "gentle exercise",
                "meditation",
                "talking to a friend",
                "engaging in a comforting routine",
            ],
            ActivityCategory::Energy => &[
                "physical activity",
                "organizing or cleaning",
                "starting a project",
                "social activities",
            ],
            ActivityCategory::Calm => &[
                "reading",
                "listening to music",
                "spending time in nature",
                "practicing mindfulness",
            ],
        }
    }
}

/// Everything returned to the user alongside a detected emotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupportPlan {
    pub primary_suggestion: &'static str,
    pub activities: Vec<&'static str>,
    pub confidence_note: String,
    pub additional_note: Option<&'static str>,
    pub affirmation: &'static str,
}

// ---------------------------------------------------------------------------
// Picks
// ---------------------------------------------------------------------------

/// One random suggestion for `emotion`.
pub fn suggestion<R: Rng + ?Sized>(emotion: Emotion, rng: &mut R) -> &'static str {
    suggestions_for(emotion)
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_SUGGESTION)
}

/// Up to `count` distinct suggestions in random order.
pub fn suggestions<R: Rng + ?Sized>(
    emotion: Emotion,
    count: usize,
    rng: &mut R,
) -> Vec<&'static str> {
    let mut all = suggestions_for(emotion).to_vec();
    all.shuffle(rng);
    all.truncate(count);
    all
}

/// Two distinct random activities for the emotion's category.
pub fn activities<R: Rng + ?Sized>(emotion: Emotion, rng: &mut R) -> Vec<&'static str> {
    ActivityCategory::for_emotion(emotion)
        .activities()
        .choose_multiple(rng, ACTIVITIES_PER_RESPONSE)
        .copied()
        .collect()
}

/// Extra context for strong readings of certain emotions.
pub fn additional_note(emotion: Emotion, confidence: f64) -> Option<&'static str> {
    if emotion.is_distress() && confidence > 0.7 {
        Some("If these feelings persist or become overwhelming, consider speaking with a mental health professional.")
    } else if emotion == Emotion::Anger && confidence > 0.8 {
        Some("Remember that anger is often a secondary emotion. Consider what might be underneath - hurt, fear, or frustration.")
    } else if emotion == Emotion::Joy && confidence > 0.8 {
        Some("Savor this positive moment! Research shows that actively appreciating good feelings can help them last longer.")
    } else {
        None
    }
}

/// Suggestion, activities and notes for a detected emotion.
pub fn comprehensive_support<R: Rng + ?Sized>(
    emotion: Emotion,
    confidence: f64,
    rng: &mut R,
) -> SupportPlan {
    SupportPlan {
        primary_suggestion: suggestion(emotion, rng),
        activities: activities(emotion, rng),
        confidence_note: format!(
            "I'm {:.0}% confident about this emotion detection.",
            confidence * 100.0
        ),
        additional_note: additional_note(emotion, confidence),
        affirmation: emotion.affirmation(),
    }
}

/// Affirmation for the current mood; neutral when nothing is known yet.
pub fn daily_affirmation(emotion: Option<Emotion>) -> &'static str {
    emotion.unwrap_or(Emotion::Neutral).affirmation()
}

/// Whether the message contains a self-harm phrase.
pub fn detects_crisis(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CRISIS_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
