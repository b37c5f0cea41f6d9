//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BRAMBLE_USER_SERVICE_URL` - Base URL of the user service (auth, cart,
//!   wishlist)
//! - `BRAMBLE_CATALOG_SERVICE_URL` - Base URL of the catalog service
//!
//! ## Optional
//! - `BRAMBLE_STATE_DIR` - Directory for persisted slot state and the CLI
//!   token file (default: platform data dir + `bramble`)
//! - `BRAMBLE_RECONCILE_POLICY` - `local-only` (default), `remote-wins`, or
//!   `union`

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::sync::ReconcilePolicy;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the user service (auth, cart, wishlist).
    pub user_service_url: Url,
    /// Base URL of the catalog service.
    pub catalog_service_url: Url,
    /// Directory for persisted local state.
    pub state_dir: PathBuf,
    /// Startup reconciliation policy for the synchronizer.
    pub reconcile_policy: ReconcilePolicy,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let user_service_url = get_url("BRAMBLE_USER_SERVICE_URL")?;
        let catalog_service_url = get_url("BRAMBLE_CATALOG_SERVICE_URL")?;

        let state_dir = get_optional_env("BRAMBLE_STATE_DIR")
            .map_or_else(default_state_dir, PathBuf::from);

        let reconcile_policy = match get_optional_env("BRAMBLE_RECONCILE_POLICY") {
            Some(raw) => raw.parse().map_err(|err| {
                ConfigError::InvalidEnvVar(
                    "BRAMBLE_RECONCILE_POLICY".to_string(),
                    format!("{err}"),
                )
            })?,
            None => ReconcilePolicy::default(),
        };

        Ok(Self {
            user_service_url,
            catalog_service_url,
            state_dir,
            reconcile_policy,
        })
    }
}

/// Default state directory under the platform data dir.
fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bramble")
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get a required environment variable parsed as a URL.
fn get_url(key: &str) -> Result<Url, ConfigError> {
    let raw = get_required_env(key)?;
    Url::parse(&raw).map_err(|err| ConfigError::InvalidEnvVar(key.to_string(), err.to_string()))
}
