//! Identity provider implementations.

mod supabase;

pub use supabase::SupabaseIdentityProvider;
