//! Application configuration loaded from environment variables.

use std::env;

use flexa_infra::{ConfigError, ProviderConfig};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub provider: ProviderConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The identity provider settings are required; host and port fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = ProviderConfig::from_lookup(&lookup)?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            provider,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SUPABASE_PROJECT_URL", "https://abc.supabase.co"),
            ("SUPABASE_PUBLIC_KEY", "anon-key"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_overrides_and_bad_port_fallback() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SUPABASE_PROJECT_URL", "https://abc.supabase.co"),
            ("SUPABASE_PUBLIC_KEY", "anon-key"),
            ("HOST", "127.0.0.1"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_missing_provider_settings_fail() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "9000")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SUPABASE_PROJECT_URL")));
    }
}
