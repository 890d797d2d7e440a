//! Mood entry constants and validation functions.
//!
//! Request-level checks shared by the API handlers: message length, look-back
//! windows, emotion filters and pagination clamping.

use crate::emotion::Emotion;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a message in characters.
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

/// [`MAX_MESSAGE_LENGTH`] as the `u64` bound `validator` length rules take.
pub const MAX_MESSAGE_LENGTH_U64: u64 = MAX_MESSAGE_LENGTH as u64;

/// Largest accepted look-back window in days.
pub const MAX_DAYS_BACK: i64 = 365;

/// Look-back window of the summary statistics.
pub const DEFAULT_STATS_DAYS: i64 = 7;

/// Look-back window of weekday/time-of-day patterns.
pub const DEFAULT_PATTERN_DAYS: i64 = 30;

/// Look-back window of generated insights.
pub const DEFAULT_INSIGHT_DAYS: i64 = 14;

/// Number of most recent entries used for the quick "recent trend".
pub const RECENT_TREND_WINDOW: usize = 7;

/// Default page size for entry listings.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum page size for entry listings.
pub const MAX_LIST_LIMIT: i64 = 500;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a chat message: must contain non-whitespace text and stay within
/// the length limit.
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    if message.trim().is_empty() {
        return Err(CoreError::Validation("Message cannot be empty".to_string()));
    }
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message exceeds maximum length of {MAX_MESSAGE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Resolve an optional `days` parameter, rejecting values outside
/// `1..=MAX_DAYS_BACK`.
pub fn resolve_days(days: Option<i64>, default: i64) -> Result<i64, CoreError> {
    let days = days.unwrap_or(default);
    if (1..=MAX_DAYS_BACK).contains(&days) {
        Ok(days)
    } else {
        Err(CoreError::Validation(format!(
            "days must be between 1 and {MAX_DAYS_BACK}, got {days}"
        )))
    }
}

/// Parse an optional emotion filter.
pub fn parse_emotion_filter(emotion: Option<&str>) -> Result<Option<Emotion>, CoreError> {
    match emotion.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(label) => Ok(Some(label.parse::<Emotion>()?)),
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_message ----------------------------------------------------

    #[test]
    fn normal_message_accepted() {
        assert!(validate_message("I'm feeling anxious about my presentation").is_ok());
    }

    #[test]
    fn blank_message_rejected() {
        assert!(validate_message("").is_err());
        assert!(validate_message("  \n\t ").is_err());
    }

    #[test]
    fn message_at_limit_accepted() {
        assert!(validate_message(&"a".repeat(MAX_MESSAGE_LENGTH)).is_ok());
    }

    #[test]
    fn overlong_message_rejected() {
        let err = validate_message(&"a".repeat(MAX_MESSAGE_LENGTH + 1))
            .unwrap_err()
            .to_string();
        assert!(err.contains("maximum length"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_message(&"é".repeat(MAX_MESSAGE_LENGTH)).is_ok());
    }

    // -- resolve_days --------------------------------------------------------

    #[test]
    fn days_default_applies() {
        assert_eq!(resolve_days(None, 7).unwrap(), 7);
    }

    #[test]
    fn days_out_of_range_rejected() {
        assert!(resolve_days(Some(0), 7).is_err());
        assert!(resolve_days(Some(366), 7).is_err());
        assert_eq!(resolve_days(Some(365), 7).unwrap(), 365);
    }

    // -- parse_emotion_filter ------------------------------------------------

    #[test]
    fn emotion_filter_parses_labels() {
        assert_eq!(parse_emotion_filter(Some("Joy")).unwrap(), Some(Emotion::Joy));
        assert_eq!(parse_emotion_filter(None).unwrap(), None);
        assert_eq!(parse_emotion_filter(Some("  ")).unwrap(), None);
    }

    #[test]
    fn unknown_emotion_filter_rejected() {
        let err = parse_emotion_filter(Some("bored")).unwrap_err().to_string();
        assert!(err.contains("Invalid emotion 'bored'"));
        assert!(err.contains("anticipation"));
    }

    // -- clamping ------------------------------------------------------------

    #[test]
    fn limit_is_clamped() {
        assert_eq!(clamp_limit(None, 50, 500), 50);
        assert_eq!(clamp_limit(Some(0), 50, 500), 1);
        assert_eq!(clamp_limit(Some(10_000), 50, 500), 500);
    }

    #[test]
    fn offset_is_non_negative() {
        assert_eq!(clamp_offset(Some(-5)), 0);
        assert_eq!(clamp_offset(Some(20)), 20);
    }
}
