//! Auth service client.
//!
//! Exchanges credentials for the opaque bearer token and reads the account
//! profile. Password hashing and token issuance are the service's job; this
//! client only forwards values over the wire.

use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use url::Url;

use bramble_core::{AccessToken, Profile, SignupRequest};

use crate::error::ApiError;
use crate::session::Session;

use super::{base_str, bearer, decode_json, expect_ack};

/// Client for the user service's authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    base: String,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

impl AuthClient {
    /// Create a client for the user service at `base`.
    #[must_use]
    pub fn new(base: &Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base_str(base),
        }
    }

    /// Exchange an email/password pair for a bearer token.
    ///
    /// A success response without a token in the body is treated the same
    /// as a rejected credential.
    ///
    /// # Errors
    ///
    /// `Unauthorized` on rejected credentials, otherwise the transport or
    /// decode failure.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AccessToken, ApiError> {
        let response = self
            .client
            .post(format!("{}/login", self.base))
            .json(&LoginBody { email, password })
            .send()
            .await?;

        let body: LoginResponse = decode_json(response, "login").await?;
        body.token.map(AccessToken::new).ok_or(ApiError::Unauthorized)
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns the remote failure; the caller logs in separately afterwards.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/signup", self.base))
            .json(request)
            .send()
            .await?;

        expect_ack(response, "signup").await.map(|_| ())
    }

    /// Fetch the profile for the session's account.
    ///
    /// `Unauthorized` here means the token has expired; callers drop the
    /// session and prompt for a fresh login.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` when the session has no token, otherwise the
    /// remote failure.
    #[instrument(skip(self, session))]
    pub async fn profile(&self, session: &Session) -> Result<Profile, ApiError> {
        let token = session.require_token()?;

        let response = self
            .client
            .get(format!("{}/profile", self.base))
            .header(AUTHORIZATION, bearer(token))
            .send()
            .await?;

        decode_json(response, "profile").await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_tolerates_missing_token() {
        let body: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(body.token.is_none());

        let with_token: LoginResponse =
            serde_json::from_str("{\"token\":\"abc\",\"expiresIn\":3600}").unwrap();
        assert_eq!(with_token.token.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_profile_without_credential_fails_fast() {
        let base = Url::parse("http://localhost:9").unwrap();
        let client = AuthClient::new(&base);

        let err = client
            .profile(&Session::anonymous())
            .await
            .expect_err("anonymous profile must fail");
        assert!(matches!(err, ApiError::Unauthenticated));
    }
}
