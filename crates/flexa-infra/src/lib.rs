//! # Flexa Infrastructure
//!
//! Concrete implementations of the ports defined in `flexa-core`.
//! Currently a single adapter: Supabase Auth as the identity provider.

pub mod config;
pub mod identity;

pub use config::{ConfigError, ProviderConfig};
pub use identity::SupabaseIdentityProvider;
