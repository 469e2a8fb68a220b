//! Database error conversion helpers.

use sea_orm::{DbErr, SqlErr};

use crate::domain::error::DomainError;

pub fn db_err(e: &DbErr) -> DomainError {
    DomainError::database(e.to_string())
}

/// Like [`db_err`], but a foreign-key violation means an unknown item id.
pub fn link_err(e: &DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => DomainError::UnknownItem(detail),
        _ => db_err(e),
    }
}
