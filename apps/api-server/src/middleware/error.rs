//! Error handling - maps every failure to a `{"detail": ...}` response.

use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    error::JsonPayloadError,
    http::{StatusCode, header},
};
use flexa_core::ports::SignInError;
use flexa_shared::{ErrorResponse, ValidationErrorResponse, ValidationIssue};
use validator::ValidationErrors;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body has the wrong shape. Never reaches the identity provider.
    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationIssue>),

    /// Credentials rejected or provider unusable. Cause is deliberately not exposed.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());

        match self {
            AppError::Validation(issues) => {
                response.json(ValidationErrorResponse::new(issues.clone()))
            }
            AppError::Unauthorized => response
                .insert_header((header::WWW_AUTHENTICATE, "Bearer"))
                .json(ErrorResponse::invalid_credentials()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                response.json(ErrorResponse::internal_error(detail))
            }
        }
    }
}

impl From<&ValidationErrors> for AppError {
    fn from(errors: &ValidationErrors) -> Self {
        AppError::Validation(ValidationErrorResponse::from(errors).detail)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::from(&errors)
    }
}

impl From<SignInError> for AppError {
    fn from(err: SignInError) -> Self {
        if err.is_local() {
            return AppError::Internal(err.to_string());
        }

        // Logged for operators only; clients always see the same 401.
        tracing::debug!(cause = %err, "Sign-in rejected");
        AppError::Unauthorized
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        let issue = match &err {
            JsonPayloadError::ContentType => {
                ValidationIssue::body("expected an application/json body", "content_type")
            }
            JsonPayloadError::Deserialize(inner) if inner.is_data() => {
                let message = inner.to_string();
                match missing_field(&message) {
                    Some(field) => {
                        ValidationIssue::field(field, "field required", "value_error.missing")
                    }
                    None => ValidationIssue::body(inner.to_string(), "type_error"),
                }
            }
            other => ValidationIssue::body(other.to_string(), "json_invalid"),
        };

        AppError::Validation(vec![issue])
    }
}

/// serde reports absent fields as "missing field `name` at line L column C".
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

/// Error handler for actix's JSON extractor, so malformed bodies get 422s too.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::from(err).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
