use thiserror::Error;

/// Errors surfaced to consumers of [`crate::CollectionPointsApi`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionPointsError {
    #[error("Point not found: {id}")]
    NotFound { id: i32 },

    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Unknown item referenced: {0}")]
    UnknownItem(String),

    #[error("Internal error")]
    Internal,
}

impl CollectionPointsError {
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
