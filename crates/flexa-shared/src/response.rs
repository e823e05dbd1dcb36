//! Error bodies. Every error is reported as `{"detail": ...}`.

use serde::{Deserialize, Serialize};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Fixed detail for every authentication failure.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Error body carrying a single human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::new(INVALID_CREDENTIALS)
    }

    pub fn internal_error(message: impl std::fmt::Display) -> Self {
        Self::new(format!("Internal server error: {}", message))
    }
}

/// One structural problem with the request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Location of the problem, e.g. `["body", "email"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationIssue {
    /// Problem with a single field of the body.
    pub fn field(field: impl Into<String>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), field.into()],
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// Problem with the body as a whole (unparseable JSON, wrong content type).
    pub fn body(msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// 422 body: `{"detail": [ ...issues... ]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationIssue>,
}

impl ValidationErrorResponse {
    pub fn new(detail: Vec<ValidationIssue>) -> Self {
        Self { detail }
    }
}

impl From<&ValidationErrors> for ValidationErrorResponse {
    fn from(errors: &ValidationErrors) -> Self {
        let mut detail = Vec::new();

        for (field, kind) in errors.errors() {
            // Login bodies are flat; nested structs and lists never show up here.
            if let ValidationErrorsKind::Field(field_errors) = kind {
                for error in field_errors {
                    let msg = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value for {}", field));
                    detail.push(ValidationIssue::field(
                        field.to_string(),
                        msg,
                        validation_kind(&error.code),
                    ));
                }
            }
        }

        // HashMap iteration order is unstable
        detail.sort_by(|a, b| a.loc.cmp(&b.loc));
        Self { detail }
    }
}

fn validation_kind(code: &str) -> String {
    match code {
        "email" => "value_error.email".to_string(),
        "length" => "string_too_short".to_string(),
        other => format!("value_error.{}", other),
    }
}
