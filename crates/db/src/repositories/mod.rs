//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod mood_entry_repo;

pub use mood_entry_repo::MoodEntryRepo;
