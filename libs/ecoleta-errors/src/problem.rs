//! RFC 9457 Problem Details for HTTP APIs.

use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header::CONTENT_TYPE};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Result alias for axum handlers.
pub type ApiResult<T> = Result<T, Problem>;

#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_status_code<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

fn deserialize_status_code<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    let code = u16::deserialize(deserializer)?;
    StatusCode::from_u16(code).map_err(serde::de::Error::custom)
}

/// Problem document returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "Problem")]
#[must_use]
pub struct Problem {
    /// URI reference identifying the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// Short, human-readable summary of the problem type.
    pub title: String,
    /// HTTP status code, serialized as a number.
    #[serde(
        serialize_with = "serialize_status_code",
        deserialize_with = "deserialize_status_code"
    )]
    #[schema(value_type = u16)]
    pub status: StatusCode,
    /// Explanation specific to this occurrence.
    pub detail: String,
    /// Request path the problem occurred on.
    pub instance: String,
    /// Machine-readable error code.
    pub code: String,
    pub trace_id: Option<String>,
    /// Field-level violations for validation failures.
    pub errors: Option<Vec<ValidationViolation>>,
}

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationViolation {
    /// Field name, e.g. "email"
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ValidationViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: None,
        }
    }
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_owned(),
            title: title.into(),
            status,
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
            trace_id: None,
            errors: None,
        }
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach the id of the current tracing span, if any.
    pub fn with_current_trace(self) -> Self {
        match tracing::Span::current().id() {
            Some(id) => self.with_trace_id(id.into_u64().to_string()),
            None => self,
        }
    }

    pub fn with_errors(mut self, errors: Vec<ValidationViolation>) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

pub fn bad_request(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, "Bad Request", detail)
}

pub fn not_found(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::NOT_FOUND, "Not Found", detail)
}

pub fn unprocessable(detail: impl Into<String>) -> Problem {
    Problem::new(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
        detail,
    )
}

pub fn internal_error(detail: impl Into<String>) -> Problem {
    Problem::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        detail,
    )
}

/// 400 carrying every rejected field at once.
pub fn validation_failed(errors: Vec<ValidationViolation>) -> Problem {
    Problem::new(
        StatusCode::BAD_REQUEST,
        "Validation Failed",
        "One or more fields are invalid",
    )
    .with_code("VALIDATION_ERROR")
    .with_errors(errors)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn problem_into_response_sets_status_and_content_type() {
        let p = Problem::new(StatusCode::BAD_REQUEST, "Bad Request", "invalid payload");
        let resp = p.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let ct = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(ct, APPLICATION_PROBLEM_JSON);
    }

    #[test]
    fn problem_serializes_status_as_u16() {
        let p = not_found("Point 7 not found");
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"status\":404"));
        assert!(json.contains("\"type\":\"about:blank\""));
    }

    #[test]
    fn validation_failed_lists_every_field() {
        let p = validation_failed(vec![
            ValidationViolation::new("email", "must be a valid email address"),
            ValidationViolation::new("uf", "must be a two-letter state code"),
        ]);

        assert_eq!(p.status, StatusCode::BAD_REQUEST);
        assert_eq!(p.code, "VALIDATION_ERROR");
        let errors = p.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[1].field, "uf");
    }

    #[test]
    fn convenience_constructors() {
        assert_eq!(bad_request("x").status, StatusCode::BAD_REQUEST);
        assert_eq!(not_found("x").title, "Not Found");
        assert_eq!(unprocessable("x").status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            internal_error("x").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn problem_body_round_trips_through_response() {
        let resp = bad_request("broken")
            .with_instance("/points")
            .with_code("BAD")
            .into_response();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: Problem = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.instance, "/points");
        assert_eq!(parsed.code, "BAD");
        assert_eq!(parsed.detail, "broken");
    }
}
