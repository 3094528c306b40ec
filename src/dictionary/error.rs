// Error types for dictionary store operations

use crate::turso::TursoError;

/// Error types for dictionary operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// The underlying storage failed to open, read or commit
    #[error("Storage error: {0}")]
    Storage(String),
    /// A referenced dictionary or word pair does not exist
    #[error("Not found: {0}")]
    NotFound(String),
    /// A write would violate the unique dictionary name (or a rejected duplicate pair)
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Input rejected before reaching storage
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl DictionaryError {
    /// Short machine-readable kind, used when logging failed commands
    pub fn kind(&self) -> &'static str {
        match self {
            DictionaryError::Storage(_) => "storage",
            DictionaryError::NotFound(_) => "not_found",
            DictionaryError::Conflict(_) => "conflict",
            DictionaryError::Validation(_) => "validation",
        }
    }
}

impl From<TursoError> for DictionaryError {
    fn from(error: TursoError) -> Self {
        match error {
            TursoError::Constraint(msg) => DictionaryError::Conflict(msg),
            other => DictionaryError::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
