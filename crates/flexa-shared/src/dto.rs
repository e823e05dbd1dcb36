//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Token type reported alongside every access token.
pub const BEARER: &str = "bearer";

/// Request to login.
///
/// Only the shape is checked here. Password policy belongs to the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Response containing the provider-issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

impl LoginResponse {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: BEARER.to_string(),
        }
    }
}

/// Service banner served at `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerResponse {
    pub message: String,
    pub version: String,
}

/// Liveness payload served at `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("user@example.com", "x").validate().is_ok());
    }

    #[test]
    fn test_invalid_email() {
        let errors = request("not-an-email", "correct-pw").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("password"));
    }

    #[test]
    fn test_empty_password() {
        let errors = request("user@example.com", "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_short_password_is_not_enforced_locally() {
        assert!(request("user@example.com", "a").validate().is_ok());
    }

    #[test]
    fn test_login_response_shape() {
        let json = serde_json::to_value(LoginResponse::bearer("opaque")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "access_token": "opaque", "token_type": "bearer" })
        );
    }
}
