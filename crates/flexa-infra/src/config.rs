//! Identity provider configuration.

use secrecy::Secret;
use url::Url;

pub const PROJECT_URL_VAR: &str = "SUPABASE_PROJECT_URL";
pub const PUBLIC_KEY_VAR: &str = "SUPABASE_PUBLIC_KEY";

/// Startup-time configuration failures. Fatal; never raised per request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{var} is not a valid URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
}

/// Where the identity provider lives and the public key used to call it.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub project_url: Url,
    pub public_key: Secret<String>,
}

impl ProviderConfig {
    /// Load from `SUPABASE_PROJECT_URL` and `SUPABASE_PUBLIC_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let raw_url = required(PROJECT_URL_VAR)?;
        let public_key = required(PUBLIC_KEY_VAR)?;

        let project_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidUrl {
            var: PROJECT_URL_VAR,
            reason: e.to_string(),
        })?;

        if !matches!(project_url.scheme(), "http" | "https") || project_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                var: PROJECT_URL_VAR,
                reason: format!("expected an http(s) base URL, got {}", project_url),
            });
        }

        Ok(Self {
            project_url,
            public_key: Secret::new(public_key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_loads_both_values() {
        let config = ProviderConfig::from_lookup(lookup(&[
            (PROJECT_URL_VAR, "https://abc.supabase.co"),
            (PUBLIC_KEY_VAR, "anon-key"),
        ]))
        .unwrap();

        assert_eq!(config.project_url.as_str(), "https://abc.supabase.co/");
        assert_eq!(config.public_key.expose_secret(), "anon-key");
    }

    #[test]
    fn test_missing_url() {
        let err = ProviderConfig::from_lookup(lookup(&[(PUBLIC_KEY_VAR, "anon-key")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(PROJECT_URL_VAR)));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let err = ProviderConfig::from_lookup(lookup(&[
            (PROJECT_URL_VAR, "https://abc.supabase.co"),
            (PUBLIC_KEY_VAR, "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing(PUBLIC_KEY_VAR)));
    }

    #[test]
    fn test_unparseable_url() {
        let err = ProviderConfig::from_lookup(lookup(&[
            (PROJECT_URL_VAR, "abc.supabase.co"),
            (PUBLIC_KEY_VAR, "anon-key"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = ProviderConfig::from_lookup(lookup(&[
            (PROJECT_URL_VAR, "ftp://abc.supabase.co"),
            (PUBLIC_KEY_VAR, "anon-key"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { var: PROJECT_URL_VAR, .. }));
    }

    #[test]
    fn test_cannot_be_a_base_url_rejected() {
        let err = ProviderConfig::from_lookup(lookup(&[
            (PROJECT_URL_VAR, "mailto:ops@example.com"),
            (PUBLIC_KEY_VAR, "anon-key"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { var: PROJECT_URL_VAR, .. }));
    }

    #[test]
    fn test_http_url_accepted() {
        let config = ProviderConfig::from_lookup(lookup(&[
            (PROJECT_URL_VAR, "http://localhost:54321"),
            (PUBLIC_KEY_VAR, "anon-key"),
        ]))
        .unwrap();
        assert_eq!(config.project_url.scheme(), "http");
    }
}
