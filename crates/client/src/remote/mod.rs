//! Remote HTTP service clients.
//!
//! # Architecture
//!
//! - Plain REST/JSON over `reqwest`
//! - Bearer credentials sent as `Authorization: Bearer <token>`
//! - Response bodies are read as text first so decode failures can be
//!   logged with the offending payload, then parsed with `serde_json`
//! - No retries anywhere; the user re-triggers failed actions
//!
//! # Services
//!
//! - [`AuthClient`] - user service: login, signup, profile
//! - [`HttpMutationClient`] - user service: cart/wishlist membership
//! - [`CatalogClient`] - catalog service: product listing and seller writes

pub mod auth;
pub mod catalog;
pub mod mutation;

pub use auth::AuthClient;
pub use catalog::CatalogClient;
pub use mutation::{HttpMutationClient, MutationApi};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use bramble_core::AccessToken;

use crate::error::ApiError;

/// Acknowledgement returned by mutation endpoints.
///
/// The body is advisory; an undecodable ack on a success status is treated
/// as an empty one rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    /// Optional human-readable server message.
    #[serde(default)]
    pub message: Option<String>,
}

/// `Authorization` header value for a bearer token.
pub(crate) fn bearer(token: &AccessToken) -> String {
    format!("Bearer {}", token.expose())
}

/// Base URL as a string without a trailing slash, for endpoint formatting.
pub(crate) fn base_str(url: &Url) -> String {
    url.as_str().trim_end_matches('/').to_string()
}

/// Map a non-success HTTP status to the error taxonomy.
pub(crate) fn status_error(status: reqwest::StatusCode, context: &str) -> ApiError {
    match status.as_u16() {
        401 | 403 => ApiError::Unauthorized,
        404 => ApiError::NotFound(context.to_string()),
        code => ApiError::Server(code),
    }
}

/// Decode a JSON response, logging the body on failure.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        tracing::debug!(
            context,
            status = %status,
            body = %truncate(&text),
            "remote call failed"
        );
        return Err(status_error(status, context));
    }

    serde_json::from_str(&text).map_err(|err| {
        tracing::error!(
            context,
            error = %err,
            body = %truncate(&text),
            "failed to decode response body"
        );
        ApiError::Malformed(err)
    })
}

/// Check the status and decode an [`Ack`], tolerating bodies that are not
/// valid acks (empty, plain text) on success.
pub(crate) async fn expect_ack(response: reqwest::Response, context: &str) -> Result<Ack, ApiError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        tracing::debug!(
            context,
            status = %status,
            body = %truncate(&text),
            "remote call failed"
        );
        return Err(status_error(status, context));
    }

    Ok(serde_json::from_str(&text).unwrap_or_default())
}

fn truncate(s: &str) -> String {
    s.chars().take(500).collect()
}
