//! Errors returned by [`crate::Db::in_transaction`].

use thiserror::Error;

/// Database-level failure (connection lost, begin/commit failed).
///
/// Carries only the message so callers never depend on `SeaORM` error types.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct InfraError {
    message: String,
}

impl InfraError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a failed transaction: either the callback's own error or an
/// infrastructure failure around it.
#[derive(Debug, Clone, Error)]
pub enum TxError<E> {
    #[error("{0}")]
    Domain(E),
    #[error("infrastructure error: {0}")]
    Infra(InfraError),
}

impl<E> TxError<E> {
    /// Collapse into the domain error type, mapping infrastructure failures with `map_infra`.
    pub fn into_domain<F>(self, map_infra: F) -> E
    where
        F: FnOnce(InfraError) -> E,
    {
        match self {
            TxError::Domain(e) => e,
            TxError::Infra(infra) => map_infra(infra),
        }
    }
}
