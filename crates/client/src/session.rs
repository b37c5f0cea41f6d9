//! Session context.
//!
//! A [`Session`] is immutable and explicitly passed: it is injected into the
//! remote clients and the synchronizer at construction, and replaced
//! wholesale on login or logout by building new instances. Nothing here is
//! module-level or mutated in place, so a completion can only ever observe
//! the session it started under.

use bramble_core::AccessToken;

use crate::error::ApiError;

/// An authentication context: either anonymous or holding a bearer token.
///
/// The token is opaque; it is forwarded to the services verbatim and never
/// inspected client-side.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<AccessToken>,
}

impl Session {
    /// A session with no credential. All remote operations fail with
    /// [`ApiError::Unauthenticated`].
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    /// A session carrying a bearer token from the auth service.
    #[must_use]
    pub const fn authenticated(token: AccessToken) -> Self {
        Self { token: Some(token) }
    }

    /// Whether a credential is present. Presence says nothing about whether
    /// the server still accepts it.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The bearer token, if present.
    #[must_use]
    pub const fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Credential guard used by every remote operation.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthenticated`] when the session has no token.
    pub(crate) fn require_token(&self) -> Result<&AccessToken, ApiError> {
        self.token.as_ref().ok_or(ApiError::Unauthenticated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session_has_no_token() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(matches!(
            session.require_token(),
            Err(ApiError::Unauthenticated)
        ));
    }

    #[test]
    fn test_authenticated_session_exposes_token() {
        let session = Session::authenticated(AccessToken::new("tok"));
        assert!(session.is_authenticated());
        assert_eq!(session.require_token().unwrap().expose(), "tok");
    }
}
