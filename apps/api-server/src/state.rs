//! Application state - shared across all handlers.

use std::sync::Arc;

use flexa_core::ports::IdentityProvider;
use flexa_infra::{ProviderConfig, SupabaseIdentityProvider};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Build the state around the Supabase identity provider.
    pub fn new(provider: ProviderConfig) -> Self {
        tracing::info!(
            project_url = %provider.project_url,
            "Identity provider configured"
        );

        Self::with_provider(Arc::new(SupabaseIdentityProvider::new(provider)))
    }

    pub fn with_provider(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }
}
