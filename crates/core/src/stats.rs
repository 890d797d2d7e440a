//! Mood tracking analytics over logged entries.
//!
//! All functions are pure: they take the entries (oldest first), the current
//! time and the UTC offset used for calendar bucketing, so results are
//! reproducible in tests.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, FixedOffset, Timelike};
use serde::Serialize;

use crate::emotion::Emotion;
use crate::entries::RECENT_TREND_WINDOW;
use crate::types::Timestamp;

/// Minimum number of entries before a sentiment trend is reported.
pub const MIN_TREND_ENTRIES: usize = 4;

/// Mean sentiment shift between halves that counts as a trend.
pub const TREND_THRESHOLD: f64 = 0.1;

/// Minimum run length reported as a streak.
pub const MIN_STREAK: usize = 2;

/// Minimum streak length mentioned in insights.
pub const INSIGHT_STREAK: usize = 3;

// ---------------------------------------------------------------------------
// Sample abstraction
// ---------------------------------------------------------------------------

/// Anything that looks like a logged mood entry.
pub trait MoodSample {
    fn emotion(&self) -> Emotion;
    fn confidence(&self) -> f64;
    fn sentiment_score(&self) -> f64;
    fn recorded_at(&self) -> Timestamp;
    fn message(&self) -> &str;
}

impl<S: MoodSample + ?Sized> MoodSample for &S {
    fn emotion(&self) -> Emotion {
        (**self).emotion()
    }
    fn confidence(&self) -> f64 {
        (**self).confidence()
    }
    fn sentiment_score(&self) -> f64 {
        (**self).sentiment_score()
    }
    fn recorded_at(&self) -> Timestamp {
        (**self).recorded_at()
    }
    fn message(&self) -> &str {
        (**self).message()
    }
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Direction of the sentiment across a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
    NoData,
}

/// Summary statistics for a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodStatistics {
    pub days_back: i64,
    pub total_entries: usize,
    /// `None` when the window is empty.
    pub most_common_emotion: Option<Emotion>,
    pub avg_confidence: f64,
    pub avg_sentiment: f64,
    pub emotion_distribution: BTreeMap<Emotion, usize>,
    /// Entry count per local date (`YYYY-MM-DD`).
    pub daily_counts: BTreeMap<String, usize>,
    pub trend: Trend,
}

/// Coarse local time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Morning 5-11, afternoon 12-16, evening 17-21, night otherwise.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

/// Most common emotion on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayPattern {
    pub day: String,
    pub emotion: Emotion,
    pub entries: usize,
}

/// Most common emotion per weekday and per time of day.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EmotionPatterns {
    /// Monday first; days without entries are omitted.
    pub day_patterns: Vec<WeekdayPattern>,
    pub time_patterns: BTreeMap<TimeOfDay, Emotion>,
}

/// A run of consecutive identical emotions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Streak {
    pub emotion: Emotion,
    pub count: usize,
    /// Timestamp of the oldest entry in the run.
    pub start_date: Timestamp,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Entries recorded within the last `days_back` days.
pub fn window<S: MoodSample>(entries: &[S], days_back: i64, now: Timestamp) -> Vec<&S> {
    let cutoff = now - Duration::days(days_back);
    entries
        .iter()
        .filter(|e| e.recorded_at() >= cutoff)
        .collect()
}

/// Most frequent emotion; ties go to the emotion seen first.
pub fn most_common<I>(emotions: I) -> Option<Emotion>
where
    I: IntoIterator<Item = Emotion>,
{
    let mut counts: Vec<(Emotion, usize)> = Vec::new();
    for emotion in emotions {
        match counts.iter_mut().find(|(e, _)| *e == emotion) {
            Some((_, count)) => *count += 1,
            None => counts.push((emotion, 1)),
        }
    }
    counts
        .iter()
        .fold(None::<(Emotion, usize)>, |best, &(emotion, count)| match best {
            Some((_, best_count)) if count <= best_count => best,
            _ => Some((emotion, count)),
        })
        .map(|(emotion, _)| emotion)
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Sentiment trend comparing the first and second halves of the entries.
pub fn sentiment_trend<S: MoodSample>(entries: &[S]) -> Trend {
    if entries.is_empty() {
        return Trend::NoData;
    }
    if entries.len() < MIN_TREND_ENTRIES {
        return Trend::InsufficientData;
    }
    let mid = entries.len() / 2;
    let first = mean(entries[..mid].iter().map(MoodSample::sentiment_score));
    let second = mean(entries[mid..].iter().map(MoodSample::sentiment_score));

    if second > first + TREND_THRESHOLD {
        Trend::Improving
    } else if second < first - TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// Summary statistics for the last `days_back` days.
pub fn statistics<S: MoodSample>(
    entries: &[S],
    days_back: i64,
    now: Timestamp,
    offset: FixedOffset,
) -> MoodStatistics {
    let recent = window(entries, days_back, now);

    let mut emotion_distribution = BTreeMap::new();
    let mut daily_counts = BTreeMap::new();
    for entry in &recent {
        *emotion_distribution.entry(entry.emotion()).or_insert(0) += 1;
        let date = entry
            .recorded_at()
            .with_timezone(&offset)
            .format("%Y-%m-%d")
            .to_string();
        *daily_counts.entry(date).or_insert(0) += 1;
    }

    MoodStatistics {
        days_back,
        total_entries: recent.len(),
        most_common_emotion: most_common(recent.iter().map(|e| e.emotion())),
        avg_confidence: mean(recent.iter().map(|e| e.confidence())),
        avg_sentiment: mean(recent.iter().map(|e| e.sentiment_score())),
        emotion_distribution,
        daily_counts,
        trend: sentiment_trend(&recent),
    }
}

/// Most common emotion per weekday and time of day over the window.
pub fn patterns<S: MoodSample>(
    entries: &[S],
    days_back: i64,
    now: Timestamp,
    offset: FixedOffset,
) -> EmotionPatterns {
    let recent = window(entries, days_back, now);

    let mut by_day: BTreeMap<u32, Vec<Emotion>> = BTreeMap::new();
    let mut by_time: BTreeMap<TimeOfDay, Vec<Emotion>> = BTreeMap::new();
    for entry in &recent {
        let local = entry.recorded_at().with_timezone(&offset);
        by_day
            .entry(local.weekday().num_days_from_monday())
            .or_default()
            .push(entry.emotion());
        by_time
            .entry(TimeOfDay::from_hour(local.hour()))
            .or_default()
            .push(entry.emotion());
    }

    let day_patterns = by_day
        .into_iter()
        .filter_map(|(index, emotions)| {
            let day = WEEKDAY_NAMES.get(index as usize)?;
            let entries = emotions.len();
            Some(WeekdayPattern {
                day: day.to_string(),
                emotion: most_common(emotions)?,
                entries,
            })
        })
        .collect();

    let time_patterns = by_time
        .into_iter()
        .filter_map(|(slot, emotions)| most_common(emotions).map(|e| (slot, e)))
        .collect();

    EmotionPatterns {
        day_patterns,
        time_patterns,
    }
}

/// Runs of at least [`MIN_STREAK`] identical emotions, newest first.
pub fn streaks<S: MoodSample>(entries: &[S]) -> Vec<Streak> {
    let Some(newest) = entries.last() else {
        return Vec::new();
    };
    if entries.len() < MIN_STREAK {
        return Vec::new();
    }

    let mut found = Vec::new();
    let mut current = Streak {
        emotion: newest.emotion(),
        count: 1,
        start_date: newest.recorded_at(),
    };

    for entry in entries[..entries.len() - 1].iter().rev() {
        if entry.emotion() == current.emotion {
            current.count += 1;
            current.start_date = entry.recorded_at();
        } else {
            let next = Streak {
                emotion: entry.emotion(),
                count: 1,
                start_date: entry.recorded_at(),
            };
            let finished = std::mem::replace(&mut current, next);
            if finished.count >= MIN_STREAK {
                found.push(finished);
            }
        }
    }
    if current.count >= MIN_STREAK {
        found.push(current);
    }
    found
}

/// Most common emotion among the latest entries.
pub fn recent_trend<S: MoodSample>(entries: &[S]) -> Option<Emotion> {
    let start = entries.len().saturating_sub(RECENT_TREND_WINDOW);
    most_common(entries[start..].iter().map(MoodSample::emotion))
}

/// Plain-language observations about the last `days_back` days.
pub fn insights<S: MoodSample>(
    entries: &[S],
    days_back: i64,
    now: Timestamp,
    offset: FixedOffset,
) -> Vec<String> {
    let stats = statistics(entries, days_back, now, offset);
    let patterns = patterns(entries, days_back, now, offset);
    let streaks = streaks(entries);

    let mut insights = Vec::new();

    if stats.total_entries > 0 {
        insights.push(format!(
            "You've logged {} mood entries in the past {days_back} days.",
            stats.total_entries
        ));
        if let Some(emotion) = stats.most_common_emotion {
            insights.push(format!("Your most common emotion has been {emotion}."));
        }
    }

    match stats.trend {
        Trend::Improving => insights.push(
            "Your overall mood has been trending upward recently. Keep up the positive momentum!"
                .to_string(),
        ),
        Trend::Declining => insights.push(
            "Your mood has been trending downward recently. Consider reaching out for support if needed."
                .to_string(),
        ),
        Trend::Stable => {
            insights.push("Your mood has been relatively stable recently.".to_string())
        }
        Trend::InsufficientData | Trend::NoData => {}
    }

    if let Some(busiest) = patterns.day_patterns.iter().map(|d| d.entries).max() {
        let days: Vec<&str> = patterns
            .day_patterns
            .iter()
            .filter(|d| d.entries == busiest)
            .map(|d| d.day.as_str())
            .collect();
        insights.push(format!(
            "You tend to log entries most often on {}.",
            days.join(", ")
        ));
    }

    if let Some(streak) = streaks.first().filter(|s| s.count >= INSIGHT_STREAK) {
        insights.push(format!(
            "You've had {} consecutive entries of {}.",
            streak.count, streak.emotion
        ));
    }

    insights
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::fixtures::{at, sample, utc};
    use super::*;

    // -- window / most_common ------------------------------------------------

    #[test]
    fn window_excludes_old_entries() {
        let entries = vec![
            sample(Emotion::Joy, 0.5, at(1, 9)),
            sample(Emotion::Sadness, -0.5, at(10, 9)),
        ];
        let recent = window(&entries, 7, at(12, 9));
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].emotion, Emotion::Sadness);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let entries = vec![sample(Emotion::Joy, 0.5, at(5, 9))];
        assert_eq!(window(&entries, 7, at(12, 9)).len(), 1);
    }

    #[test]
    fn most_common_ties_go_to_first_seen() {
        let emotions = [Emotion::Fear, Emotion::Joy, Emotion::Joy, Emotion::Fear];
        assert_eq!(most_common(emotions), Some(Emotion::Fear));
        assert_eq!(most_common(Vec::new()), None);
    }

    // -- statistics ----------------------------------------------------------

    #[test]
    fn empty_statistics() {
        let entries: Vec<fixtures::Sample> = Vec::new();
        let stats = statistics(&entries, 7, at(12, 9), utc());
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.most_common_emotion, None);
        assert_eq!(stats.avg_confidence, 0.0);
        assert_eq!(stats.trend, Trend::NoData);
        assert!(stats.daily_counts.is_empty());
    }

    #[test]
    fn statistics_aggregate_window() {
        let entries = vec![
            sample(Emotion::Joy, 0.4, at(10, 9)),
            sample(Emotion::Joy, 0.6, at(10, 18)),
            sample(Emotion::Fear, -0.2, at(11, 9)),
        ];
        let stats = statistics(&entries, 7, at(12, 9), utc());
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.most_common_emotion, Some(Emotion::Joy));
        assert!((stats.avg_sentiment - 0.8 / 3.0).abs() < 1e-9);
        assert!((stats.avg_confidence - 0.8).abs() < 1e-9);
        assert_eq!(stats.emotion_distribution[&Emotion::Joy], 2);
        assert_eq!(stats.daily_counts["2024-06-10"], 2);
        assert_eq!(stats.daily_counts["2024-06-11"], 1);
        assert_eq!(stats.trend, Trend::InsufficientData);
    }

    #[test]
    fn daily_counts_respect_offset() {
        let entries = vec![sample(Emotion::Joy, 0.4, at(10, 23))];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let stats = statistics(&entries, 7, at(12, 9), plus_two);
        assert_eq!(stats.daily_counts["2024-06-11"], 1);
    }

    // -- trend ---------------------------------------------------------------

    #[test]
    fn improving_trend() {
        let entries = vec![
            sample(Emotion::Sadness, -0.6, at(10, 9)),
            sample(Emotion::Sadness, -0.4, at(10, 10)),
            sample(Emotion::Joy, 0.3, at(10, 11)),
            sample(Emotion::Joy, 0.5, at(10, 12)),
        ];
        assert_eq!(sentiment_trend(&entries), Trend::Improving);
    }

    #[test]
    fn declining_trend() {
        let entries = vec![
            sample(Emotion::Joy, 0.5, at(10, 9)),
            sample(Emotion::Joy, 0.5, at(10, 10)),
            sample(Emotion::Sadness, 0.1, at(10, 11)),
            sample(Emotion::Sadness, 0.1, at(10, 12)),
            sample(Emotion::Sadness, 0.1, at(10, 13)),
        ];
        assert_eq!(sentiment_trend(&entries), Trend::Declining);
    }

    #[test]
    fn small_shift_is_stable() {
        let entries = vec![
            sample(Emotion::Joy, 0.2, at(10, 9)),
            sample(Emotion::Joy, 0.2, at(10, 10)),
            sample(Emotion::Joy, 0.25, at(10, 11)),
            sample(Emotion::Joy, 0.25, at(10, 12)),
        ];
        assert_eq!(sentiment_trend(&entries), Trend::Stable);
    }

    // -- patterns ------------------------------------------------------------

    #[test]
    fn patterns_group_by_weekday_and_time_of_day() {
        let entries = vec![
            sample(Emotion::Joy, 0.5, at(10, 8)),      // Monday morning
            sample(Emotion::Joy, 0.5, at(10, 13)),     // Monday afternoon
            sample(Emotion::Anxiety, -0.3, at(10, 23)), // Monday night
            sample(Emotion::Sadness, -0.5, at(11, 19)), // Tuesday evening
        ];
        let result = patterns(&entries, 30, at(12, 9), utc());

        assert_eq!(result.day_patterns.len(), 2);
        assert_eq!(result.day_patterns[0].day, "Monday");
        assert_eq!(result.day_patterns[0].emotion, Emotion::Joy);
        assert_eq!(result.day_patterns[0].entries, 3);
        assert_eq!(result.day_patterns[1].day, "Tuesday");

        assert_eq!(result.time_patterns[&TimeOfDay::Morning], Emotion::Joy);
        assert_eq!(result.time_patterns[&TimeOfDay::Night], Emotion::Anxiety);
        assert_eq!(result.time_patterns[&TimeOfDay::Evening], Emotion::Sadness);
    }

    #[test]
    fn time_of_day_boundaries() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(22), TimeOfDay::Night);
    }

    // -- streaks -------------------------------------------------------------

    #[test]
    fn streaks_newest_first() {
        let entries = vec![
            sample(Emotion::Fear, 0.0, at(10, 1)),
            sample(Emotion::Fear, 0.0, at(10, 2)),
            sample(Emotion::Joy, 0.0, at(10, 3)),
            sample(Emotion::Sadness, 0.0, at(10, 4)),
            sample(Emotion::Sadness, 0.0, at(10, 5)),
            sample(Emotion::Sadness, 0.0, at(10, 6)),
        ];
        let found = streaks(&entries);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].emotion, Emotion::Sadness);
        assert_eq!(found[0].count, 3);
        assert_eq!(found[0].start_date, at(10, 4));
        assert_eq!(found[1].emotion, Emotion::Fear);
        assert_eq!(found[1].count, 2);
    }

    #[test]
    fn single_entry_has_no_streaks() {
        let entries = vec![sample(Emotion::Joy, 0.0, at(10, 1))];
        assert!(streaks(&entries).is_empty());
    }

    // -- recent_trend / insights ---------------------------------------------

    #[test]
    fn recent_trend_uses_last_seven() {
        let mut entries: Vec<_> = (1..=5)
            .map(|h| sample(Emotion::Sadness, 0.0, at(9, h)))
            .collect();
        entries.extend((1..=4).map(|h| sample(Emotion::Joy, 0.0, at(10, h))));
        // Last seven: 3 sadness, 4 joy.
        assert_eq!(recent_trend(&entries), Some(Emotion::Joy));
    }

    #[test]
    fn insights_summarise_activity() {
        let entries = vec![
            sample(Emotion::Sadness, -0.6, at(10, 9)),
            sample(Emotion::Sadness, -0.5, at(10, 10)),
            sample(Emotion::Joy, 0.4, at(11, 11)),
            sample(Emotion::Joy, 0.5, at(11, 12)),
            sample(Emotion::Joy, 0.6, at(11, 13)),
        ];
        let result = insights(&entries, 14, at(12, 9), utc());
        assert_eq!(
            result,
            vec![
                "You've logged 5 mood entries in the past 14 days.".to_string(),
                "Your most common emotion has been joy.".to_string(),
                "Your overall mood has been trending upward recently. Keep up the positive momentum!"
                    .to_string(),
                "You tend to log entries most often on Tuesday.".to_string(),
                "You've had 3 consecutive entries of joy.".to_string(),
            ]
        );
    }

    #[test]
    fn insights_empty_without_entries() {
        let entries: Vec<fixtures::Sample> = Vec::new();
        assert!(insights(&entries, 14, at(12, 9), utc()).is_empty());
    }
}
