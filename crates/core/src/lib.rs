//! Domain logic for the moodlog service.
//!
//! This crate has no internal dependencies: emotion labels, the lexicon
//! sentiment scorer, the keyword analyzer, self-care suggestions, mood
//! analytics, chart data builders and export encoding all live here so the
//! database and API layers stay thin.

pub mod analyzer;
pub mod charts;
pub mod classifier;
pub mod emotion;
pub mod entries;
pub mod error;
pub mod export;
pub mod lexicon;
pub mod stats;
pub mod suggestions;
pub mod types;
