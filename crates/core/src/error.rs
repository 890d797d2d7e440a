use crate::emotion::{valid_labels, UnknownEmotion};
use crate::types::DbId;

/// Domain errors shared by every moodlog crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A mood entry (or other record) does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Rejected user input: empty message, bad window, unknown label.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UnknownEmotion> for CoreError {
    fn from(err: UnknownEmotion) -> Self {
        CoreError::Validation(format!(
            "Invalid emotion '{}'. Must be one of: {}",
            err.0.trim(),
            valid_labels()
        ))
    }
}
