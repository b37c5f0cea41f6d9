//! Bearer credential types.
//!
//! The auth service issues an opaque bearer token at login. The client
//! never inspects its contents; it is forwarded verbatim in the
//! `Authorization` header until the server rejects it.

use secrecy::{ExposeSecret, SecretString};

/// Opaque bearer token representing an authenticated session.
///
/// Implements `Debug` via [`SecretString`], which redacts the value.
#[derive(Clone, Debug)]
pub struct AccessToken(SecretString);

impl AccessToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Expose the raw token for header construction.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}
