use secrecy::{ExposeSecret, Secret};

/// An email/password pair presented for a single sign-in attempt.
///
/// Lives for one request. The password is wrapped so it never shows up in
/// `Debug` output or log fields.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Secret::new(password.into()),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Plain-text password, for handing to the identity provider only.
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }
}
