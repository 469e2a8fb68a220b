//! Error responses shared by the Ecoleta HTTP surface.
//!
//! Every failing endpoint answers with an RFC 9457 [`Problem`] document
//! (`application/problem+json`).

pub mod problem;

pub use problem::{
    APPLICATION_PROBLEM_JSON, ApiResult, Problem, ValidationViolation, bad_request, internal_error,
    not_found, unprocessable, validation_failed,
};
