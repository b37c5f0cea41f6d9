//! Error taxonomy for remote calls and persisted state.
//!
//! [`ApiError`] is the one user-facing family: the synchronizer treats every
//! kind identically for state purposes (no membership change on failure) and
//! propagates the kind so callers can pick a message. [`StoreError`] never
//! reaches users; the synchronizer logs and absorbs it.

use thiserror::Error;

/// Errors surfaced by the remote services and the credential guard.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential present. Produced locally, never by a server; surfaced
    /// as a prompt to log in.
    #[error("not logged in")]
    Unauthenticated,

    /// The server rejected the credential (401/403). Callers treat this as
    /// session expiry and re-authenticate.
    #[error("session expired, please log in again")]
    Unauthorized,

    /// The requested resource no longer exists (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server failed (5xx) or answered with an unexpected status.
    #[error("server error: HTTP {0}")]
    Server(u16),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the caller should discard its session and re-authenticate.
    #[must_use]
    pub const fn invalidates_session(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::Unauthorized)
    }
}

/// Persistence failures for the slot store.
///
/// Non-fatal by policy: callers fall back to the empty set on load and keep
/// the in-memory state on save.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
