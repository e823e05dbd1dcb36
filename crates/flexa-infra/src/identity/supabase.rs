//! Supabase Auth (GoTrue) password sign-in over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use url::Url;

use flexa_core::domain::{AccessToken, Credentials};
use flexa_core::ports::{IdentityProvider, SignInError};

use crate::config::ProviderConfig;

const TOKEN_PATH: &str = "auth/v1/token";
const API_KEY_HEADER: &str = "apikey";

/// Identity provider backed by a Supabase project's auth endpoint.
///
/// Holds one `reqwest::Client`; its connection pool is shared by all requests.
/// No timeout is set beyond the client's defaults and failed calls are not retried.
pub struct SupabaseIdentityProvider {
    client: Client,
    project_url: Url,
    public_key: Secret<String>,
}

impl SupabaseIdentityProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: ProviderConfig, client: Client) -> Self {
        Self {
            client,
            project_url: config.project_url,
            public_key: config.public_key,
        }
    }

    /// `{project}/auth/v1/token?grant_type=password`
    fn token_endpoint(&self) -> Result<Url, SignInError> {
        if self.project_url.cannot_be_a_base() {
            return Err(SignInError::Request(format!(
                "{} cannot be used as a base URL",
                self.project_url
            )));
        }

        let mut base = self.project_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base
            .join(TOKEN_PATH)
            .map_err(|e| SignInError::Request(e.to_string()))?;
        url.query_pairs_mut().append_pair("grant_type", "password");
        Ok(url)
    }
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

/// The slice of the provider's session payload we rely on.
#[derive(Deserialize)]
struct Session {
    access_token: Option<String>,
}

/// GoTrue has used several error shapes over time.
#[derive(Deserialize)]
struct ProviderErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ProviderErrorBody {
    fn reason(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentityProvider {
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, SignInError> {
        let url = self.token_endpoint()?;
        let key = self.public_key.expose_secret();

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, key)
            .bearer_auth(key)
            .json(&PasswordGrant {
                email: credentials.email(),
                password: credentials.expose_password(),
            })
            .send()
            .await
            .map_err(|e| SignInError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SignInError::Transport(e.to_string()))?;

        if !status.is_success() {
            let reason = serde_json::from_slice::<ProviderErrorBody>(&body)
                .ok()
                .and_then(ProviderErrorBody::reason)
                .unwrap_or_else(|| status.to_string());
            return Err(SignInError::Rejected {
                status: status.as_u16(),
                reason,
            });
        }

        let session: Option<Session> = serde_json::from_slice(&body)
            .map_err(|e| SignInError::MalformedResponse(e.to_string()))?;

        let token = session
            .and_then(|s| s.access_token)
            .ok_or(SignInError::NoSession)?;

        AccessToken::new(token).map_err(|_| SignInError::NoSession)
    }
}
