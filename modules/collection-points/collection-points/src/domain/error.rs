use collection_points_sdk::CollectionPointsError;
use ecoleta_db::InfraError;
use thiserror::Error;

/// A rejected request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Point not found: {id}")]
    NotFound { id: i32 },

    #[error("Validation failed: {}", describe(.0))]
    Validation(Vec<FieldViolation>),

    /// An item link pointed at an id missing from the catalog.
    #[error("Unknown item referenced: {0}")]
    UnknownItem(String),

    #[error("Database error: {0}")]
    Database(String),
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldViolation {
            field,
            message: message.into(),
        }])
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}

impl From<InfraError> for DomainError {
    fn from(e: InfraError) -> Self {
        Self::Database(e.message().to_owned())
    }
}

impl From<DomainError> for CollectionPointsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { id } => Self::NotFound { id },
            DomainError::Validation(violations) => match violations.first() {
                Some(first) => Self::validation(first.field, describe(&violations)),
                None => Self::validation("request", "invalid request"),
            },
            DomainError::UnknownItem(detail) => Self::UnknownItem(detail),
            DomainError::Database(_) => Self::Internal,
        }
    }
}
