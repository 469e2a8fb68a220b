use ecoleta_errors::{
    Problem, ValidationViolation, internal_error, not_found, unprocessable, validation_failed,
};

use crate::domain::error::DomainError;

/// Map a domain error to an RFC 9457 Problem for the request at `instance`.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::NotFound { id } => {
            not_found(format!("Point {id} not found")).with_code("POINT_NOT_FOUND")
        }
        DomainError::Validation(violations) => validation_failed(
            violations
                .iter()
                .map(|v| ValidationViolation::new(v.field, v.message.clone()))
                .collect(),
        ),
        DomainError::UnknownItem(detail) => {
            tracing::debug!(%detail, "Registration referenced an unknown item");
            unprocessable("One or more item ids do not exist").with_code("UNKNOWN_ITEM")
        }
        DomainError::Database(_) => {
            tracing::error!(error = ?e, "Database error occurred");
            internal_error("An internal database error occurred").with_code("INTERNAL_DATABASE")
        }
    };

    problem.with_instance(instance).with_current_trace()
}

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}
