//! Chart data builders.
//!
//! Each builder filters the entries by look-back window and optional emotion
//! and returns a [`Chart`] whose `data` is ready for a client-side plotting
//! library. Nothing here renders images.

use std::collections::BTreeMap;

use chrono::{FixedOffset, Timelike};
use serde::Serialize;

use crate::emotion::Emotion;
use crate::stats::{self, MoodSample};
use crate::types::Timestamp;

/// Message attached to charts whose filtered window holds no entries.
pub const NO_DATA_MESSAGE: &str = "No data available for the selected time range";

/// Characters of the message kept in a timeline preview.
pub const PREVIEW_CHARS: usize = 50;

/// Entries in the centred rolling sentiment mean.
pub const ROLLING_WINDOW: usize = 3;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Which entries a chart covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartFilter {
    pub days_back: i64,
    pub emotion: Option<Emotion>,
}

/// The chart types served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Timeline,
    Distribution,
    Heatmap,
    SentimentTrend,
    Confidence,
}

impl ChartKind {
    /// Title used when the window is empty.
    pub fn base_title(self) -> &'static str {
        match self {
            ChartKind::Timeline => "Emotion Timeline",
            ChartKind::Distribution => "Emotion Distribution",
            ChartKind::Heatmap => "Mood Heatmap",
            ChartKind::SentimentTrend => "Sentiment Trend",
            ChartKind::Confidence => "Confidence Analysis",
        }
    }

    /// Title including the window, e.g. `Emotion Timeline - Last 7 Days`.
    pub fn title(self, days_back: i64) -> String {
        let name = match self {
            ChartKind::Heatmap => "Daily Mood Heatmap",
            ChartKind::Confidence => "Emotion Detection Confidence",
            other => other.base_title(),
        };
        format!("{name} - Last {days_back} Days")
    }
}

/// A chart payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart<T> {
    pub title: String,
    pub days_back: i64,
    pub emotion: Option<Emotion>,
    pub empty: bool,
    /// Set to [`NO_DATA_MESSAGE`] when `empty`.
    pub message: Option<&'static str>,
    pub data: T,
}

impl<T> Chart<T> {
    fn new(kind: ChartKind, filter: ChartFilter, data: T) -> Self {
        Self {
            title: kind.title(filter.days_back),
            days_back: filter.days_back,
            emotion: filter.emotion,
            empty: false,
            message: None,
            data,
        }
    }

    fn empty(kind: ChartKind, filter: ChartFilter, data: T) -> Self {
        Self {
            title: kind.base_title().to_string(),
            days_back: filter.days_back,
            emotion: filter.emotion,
            empty: true,
            message: Some(NO_DATA_MESSAGE),
            data,
        }
    }
}

/// Entries inside the window matching the emotion filter, oldest first.
pub fn select<S: MoodSample>(entries: &[S], filter: ChartFilter, now: Timestamp) -> Vec<&S> {
    let mut selected: Vec<&S> = stats::window(entries, filter.days_back, now)
        .into_iter()
        .filter(|e| filter.emotion.is_none_or(|wanted| e.emotion() == wanted))
        .collect();
    selected.sort_by_key(|e| e.recorded_at());
    selected
}

/// Emotions in order of first appearance.
fn emotions_in_order<S: MoodSample>(entries: &[&S]) -> Vec<Emotion> {
    let mut seen = Vec::new();
    for entry in entries {
        let emotion = entry.emotion();
        if !seen.contains(&emotion) {
            seen.push(emotion);
        }
    }
    seen
}

/// First [`PREVIEW_CHARS`] characters of `text`, with `...` when cut.
pub fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let cut: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub timestamp: Timestamp,
    pub preview: String,
}

/// One scatter series per emotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSeries {
    pub emotion: Emotion,
    pub label: String,
    pub color: &'static str,
    pub points: Vec<TimelinePoint>,
}

pub fn timeline<S: MoodSample>(
    entries: &[S],
    filter: ChartFilter,
    now: Timestamp,
) -> Chart<Vec<TimelineSeries>> {
    let selected = select(entries, filter, now);
    if selected.is_empty() {
        return Chart::empty(ChartKind::Timeline, filter, Vec::new());
    }

    let series = emotions_in_order(&selected)
        .into_iter()
        .map(|emotion| TimelineSeries {
            emotion,
            label: emotion.title(),
            color: emotion.color(),
            points: selected
                .iter()
                .filter(|e| e.emotion() == emotion)
                .map(|e| TimelinePoint {
                    timestamp: e.recorded_at(),
                    preview: preview(e.message()),
                })
                .collect(),
        })
        .collect();

    Chart::new(ChartKind::Timeline, filter, series)
}

// ---------------------------------------------------------------------------
// Distribution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSlice {
    pub emotion: Emotion,
    pub label: String,
    pub count: usize,
    /// Share of the window in percent.
    pub percentage: f64,
    pub color: &'static str,
}

pub fn distribution<S: MoodSample>(
    entries: &[S],
    filter: ChartFilter,
    now: Timestamp,
) -> Chart<Vec<DistributionSlice>> {
    let selected = select(entries, filter, now);
    if selected.is_empty() {
        return Chart::empty(ChartKind::Distribution, filter, Vec::new());
    }

    let total = selected.len() as f64;
    let slices = emotions_in_order(&selected)
        .into_iter()
        .map(|emotion| {
            let count = selected.iter().filter(|e| e.emotion() == emotion).count();
            DistributionSlice {
                emotion,
                label: emotion.title(),
                count,
                percentage: count as f64 * 100.0 / total,
                color: emotion.color(),
            }
        })
        .collect();

    Chart::new(ChartKind::Distribution, filter, slices)
}

// ---------------------------------------------------------------------------
// Heatmap
// ---------------------------------------------------------------------------

/// Date x hour grid of mean mood score.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Heatmap {
    /// Column labels, `HH:00`, only hours that have entries.
    pub hours: Vec<String>,
    /// Row labels, `YYYY-MM-DD`.
    pub dates: Vec<String>,
    /// `values[row][column]`; `None` where no entry was logged.
    pub values: Vec<Vec<Option<f64>>>,
}

pub fn heatmap<S: MoodSample>(
    entries: &[S],
    filter: ChartFilter,
    now: Timestamp,
    offset: FixedOffset,
) -> Chart<Heatmap> {
    let selected = select(entries, filter, now);
    if selected.is_empty() {
        return Chart::empty(ChartKind::Heatmap, filter, Heatmap::default());
    }

    let mut cells: BTreeMap<(String, u32), (f64, usize)> = BTreeMap::new();
    let mut dates = Vec::new();
    let mut hours = Vec::new();
    for entry in &selected {
        let local = entry.recorded_at().with_timezone(&offset);
        let date = local.format("%Y-%m-%d").to_string();
        let hour = local.hour();
        if !dates.contains(&date) {
            dates.push(date.clone());
        }
        if !hours.contains(&hour) {
            hours.push(hour);
        }
        let cell = cells.entry((date, hour)).or_insert((0.0, 0));
        cell.0 += f64::from(entry.emotion().mood_score());
        cell.1 += 1;
    }
    dates.sort();
    hours.sort_unstable();

    let values = dates
        .iter()
        .map(|date| {
            hours
                .iter()
                .map(|hour| {
                    cells
                        .get(&(date.clone(), *hour))
                        .map(|(sum, count)| sum / *count as f64)
                })
                .collect()
        })
        .collect();

    let grid = Heatmap {
        hours: hours.iter().map(|h| format!("{h:02}:00")).collect(),
        dates,
        values,
    };
    Chart::new(ChartKind::Heatmap, filter, grid)
}

// ---------------------------------------------------------------------------
// Sentiment trend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentPoint {
    pub timestamp: Timestamp,
    pub sentiment: f64,
    /// Centred rolling mean; `None` at edges without a full window.
    pub rolling: Option<f64>,
}

/// Centred rolling mean over [`ROLLING_WINDOW`] values. Short series are
/// returned as-is.
pub fn rolling_mean(values: &[f64]) -> Vec<Option<f64>> {
    if values.len() <= ROLLING_WINDOW {
        return values.iter().copied().map(Some).collect();
    }
    let half = ROLLING_WINDOW / 2;
    (0..values.len())
        .map(|i| {
            if i < half || i + half >= values.len() {
                None
            } else {
                let window = &values[i - half..=i + half];
                Some(window.iter().sum::<f64>() / window.len() as f64)
            }
        })
        .collect()
}

pub fn sentiment_trend<S: MoodSample>(
    entries: &[S],
    filter: ChartFilter,
    now: Timestamp,
) -> Chart<Vec<SentimentPoint>> {
    let selected = select(entries, filter, now);
    if selected.is_empty() {
        return Chart::empty(ChartKind::SentimentTrend, filter, Vec::new());
    }

    let scores: Vec<f64> = selected.iter().map(|e| e.sentiment_score()).collect();
    let points = selected
        .iter()
        .zip(rolling_mean(&scores))
        .map(|(entry, rolling)| SentimentPoint {
            timestamp: entry.recorded_at(),
            sentiment: entry.sentiment_score(),
            rolling,
        })
        .collect();

    Chart::new(ChartKind::SentimentTrend, filter, points)
}

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Box-plot summary of classifier confidence for one emotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceBox {
    pub emotion: Emotion,
    pub label: String,
    pub color: &'static str,
    pub values: Vec<f64>,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub fn confidence<S: MoodSample>(
    entries: &[S],
    filter: ChartFilter,
    now: Timestamp,
) -> Chart<Vec<ConfidenceBox>> {
    let selected = select(entries, filter, now);
    if selected.is_empty() {
        return Chart::empty(ChartKind::Confidence, filter, Vec::new());
    }

    let boxes = emotions_in_order(&selected)
        .into_iter()
        .map(|emotion| {
            let values: Vec<f64> = selected
                .iter()
                .filter(|e| e.emotion() == emotion)
                .map(|e| e.confidence())
                .collect();
            let mut sorted = values.clone();
            sorted.sort_by(f64::total_cmp);
            ConfidenceBox {
                emotion,
                label: emotion.title(),
                color: emotion.color(),
                min: sorted[0],
                median: median(&sorted),
                max: sorted[sorted.len() - 1],
                values,
            }
        })
        .collect();

    Chart::new(ChartKind::Confidence, filter, boxes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fixtures::{at, sample, utc, Sample};

    fn filter(days_back: i64, emotion: Option<Emotion>) -> ChartFilter {
        ChartFilter { days_back, emotion }
    }

    fn entries() -> Vec<Sample> {
        vec![
            sample(Emotion::Joy, 0.6, at(10, 9)),
            sample(Emotion::Sadness, -0.4, at(10, 9)),
            sample(Emotion::Joy, 0.2, at(11, 14)),
            sample(Emotion::Anger, -0.8, at(11, 20)),
        ]
    }

    // -- envelope ------------------------------------------------------------

    #[test]
    fn empty_window_carries_message() {
        let chart = timeline(&entries(), filter(7, None), at(30, 9));
        assert!(chart.empty);
        assert_eq!(chart.message, Some(NO_DATA_MESSAGE));
        assert_eq!(chart.title, "Emotion Timeline");
        assert!(chart.data.is_empty());
    }

    #[test]
    fn titles_include_window() {
        assert_eq!(
            ChartKind::Timeline.title(7),
            "Emotion Timeline - Last 7 Days"
        );
        assert_eq!(
            ChartKind::Heatmap.title(30),
            "Daily Mood Heatmap - Last 30 Days"
        );
        assert_eq!(
            ChartKind::Confidence.title(14),
            "Emotion Detection Confidence - Last 14 Days"
        );
    }

    #[test]
    fn preview_truncates_long_messages() {
        let long = "x".repeat(60);
        assert_eq!(preview(&long), format!("{}...", "x".repeat(50)));
        assert_eq!(preview(&"y".repeat(50)), "y".repeat(50));
    }

    // -- timeline / distribution ---------------------------------------------

    #[test]
    fn timeline_groups_by_emotion() {
        let chart = timeline(&entries(), filter(7, None), at(12, 9));
        assert!(!chart.empty);
        let labels: Vec<_> = chart.data.iter().map(|s| s.emotion).collect();
        assert_eq!(labels, vec![Emotion::Joy, Emotion::Sadness, Emotion::Anger]);
        assert_eq!(chart.data[0].points.len(), 2);
        assert_eq!(chart.data[0].color, "#FFD700");
    }

    #[test]
    fn emotion_filter_is_honoured() {
        let chart = distribution(&entries(), filter(7, Some(Emotion::Joy)), at(12, 9));
        assert_eq!(chart.data.len(), 1);
        assert_eq!(chart.data[0].count, 2);
        assert_eq!(chart.data[0].percentage, 100.0);
        assert_eq!(chart.emotion, Some(Emotion::Joy));
    }

    #[test]
    fn distribution_percentages() {
        let chart = distribution(&entries(), filter(7, None), at(12, 9));
        let joy = &chart.data[0];
        assert_eq!(joy.count, 2);
        assert_eq!(joy.percentage, 50.0);
        assert_eq!(joy.label, "Joy");
    }

    #[test]
    fn day_window_is_honoured() {
        // Only the 11th falls within one day of the 12th at 09:00.
        let chart = distribution(&entries(), filter(1, None), at(12, 9));
        let total: usize = chart.data.iter().map(|s| s.count).sum();
        assert_eq!(total, 2);
    }

    // -- heatmap -------------------------------------------------------------

    #[test]
    fn heatmap_averages_mood_scores() {
        let chart = heatmap(&entries(), filter(7, None), at(12, 9), utc());
        let grid = &chart.data;
        assert_eq!(grid.dates, vec!["2024-06-10", "2024-06-11"]);
        assert_eq!(grid.hours, vec!["09:00", "14:00", "20:00"]);
        // joy (2) and sadness (-2) at 09:00 on the 10th.
        assert_eq!(grid.values[0][0], Some(0.0));
        assert_eq!(grid.values[0][1], None);
        assert_eq!(grid.values[1][1], Some(2.0));
        assert_eq!(grid.values[1][2], Some(-2.0));
    }

    // -- sentiment trend -----------------------------------------------------

    #[test]
    fn rolling_mean_is_centred() {
        let rolled = rolling_mean(&[0.0, 0.3, 0.6, 0.9]);
        assert_eq!(rolled[0], None);
        assert!((rolled[1].unwrap() - 0.3).abs() < 1e-9);
        assert!((rolled[2].unwrap() - 0.6).abs() < 1e-9);
        assert_eq!(rolled[3], None);
    }

    #[test]
    fn short_series_keep_raw_values() {
        assert_eq!(
            rolling_mean(&[0.1, 0.2, 0.3]),
            vec![Some(0.1), Some(0.2), Some(0.3)]
        );
    }

    #[test]
    fn sentiment_trend_is_chronological() {
        let mut unsorted = entries();
        unsorted.reverse();
        let chart = sentiment_trend(&unsorted, filter(7, None), at(12, 9));
        let times: Vec<_> = chart.data.iter().map(|p| p.timestamp).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }

    // -- confidence ----------------------------------------------------------

    #[test]
    fn confidence_box_summary() {
        let mut data = entries();
        data[0].confidence = 0.4;
        data[2].confidence = 0.9;
        let chart = confidence(&data, filter(7, Some(Emotion::Joy)), at(12, 9));
        let joy = &chart.data[0];
        assert_eq!(joy.values, vec![0.4, 0.9]);
        assert_eq!(joy.min, 0.4);
        assert_eq!(joy.max, 0.9);
        assert!((joy.median - 0.65).abs() < 1e-9);
    }
}
