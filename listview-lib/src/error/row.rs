//! RowError for decoding list rows

/// Error raised when a JSON object cannot be used as a list row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The object has no `id` field.
    #[error("Row has no 'id' field")]
    MissingId,

    /// The `id` field is neither an integer nor a string.
    #[error("Row 'id' must be an integer or a string, got {actual}")]
    InvalidId { actual: &'static str },
}

impl RowError {
    /// Creates a new invalid id error.
    pub fn invalid_id(actual: &'static str) -> Self {
        Self::InvalidId { actual }
    }
}
