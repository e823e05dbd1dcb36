//! Domain entities - the values that travel through a login.

mod credentials;
mod token;

pub use credentials::Credentials;
pub use token::AccessToken;
