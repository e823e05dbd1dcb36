//! Identity provider port - delegated password sign-in.

use async_trait::async_trait;

use crate::domain::{AccessToken, Credentials};

/// A third-party service that owns credential storage and token issuance.
///
/// One call per login attempt; implementations must not retry.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange an email/password pair for an access token.
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, SignInError>;
}

/// Why a sign-in attempt did not produce a token.
///
/// The variants keep the cause for server-side diagnostics. Callers facing
/// clients collapse everything except [`SignInError::Request`] into a single
/// "invalid credentials" answer.
#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    /// The provider answered, but without a session or access token.
    #[error("Provider returned no session")]
    NoSession,

    #[error("Provider rejected sign-in ({status}): {reason}")]
    Rejected { status: u16, reason: String },

    #[error("Provider unreachable: {0}")]
    Transport(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// The request could not be built locally, so the provider was never called.
    #[error("Could not build provider request: {0}")]
    Request(String),
}

impl SignInError {
    /// True when the failure happened on our side before any provider call.
    pub fn is_local(&self) -> bool {
        matches!(self, SignInError::Request(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider;

    #[async_trait]
    impl IdentityProvider for FixedProvider {
        async fn sign_in_with_password(
            &self,
            credentials: &Credentials,
        ) -> Result<AccessToken, SignInError> {
            if credentials.expose_password() == "correct-pw" {
                AccessToken::new("token-1").map_err(|_| SignInError::NoSession)
            } else {
                Err(SignInError::Rejected {
                    status: 400,
                    reason: "Invalid login credentials".to_string(),
                })
            }
        }
    }

    #[tokio::test]
    async fn test_provider_as_trait_object() {
        let provider: Box<dyn IdentityProvider> = Box::new(FixedProvider);

        let ok = provider
            .sign_in_with_password(&Credentials::new("user@example.com", "correct-pw"))
            .await
            .unwrap();
        assert_eq!(ok.as_str(), "token-1");

        let err = provider
            .sign_in_with_password(&Credentials::new("user@example.com", "wrong-pw"))
            .await
            .unwrap_err();
        assert!(!err.is_local());
    }

    #[test]
    fn test_only_request_errors_are_local() {
        assert!(SignInError::Request("bad url".to_string()).is_local());
        assert!(!SignInError::NoSession.is_local());
        assert!(!SignInError::Transport("refused".to_string()).is_local());
        assert!(!SignInError::MalformedResponse("eof".to_string()).is_local());
    }
}
