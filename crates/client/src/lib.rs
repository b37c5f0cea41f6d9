//! Bramble Storefront Client - library for talking to the Bramble services.
//!
//! # Architecture
//!
//! Two remote services back the storefront: the *user service* (login,
//! signup, profile, cart, wishlist) and the *catalog service* (products).
//! This crate wraps both behind typed clients and keeps per-item cart and
//! wishlist membership consistent across three sources of truth: in-memory
//! state, the persisted snapshot on disk, and the remote store.
//!
//! # Modules
//!
//! - [`config`] - environment-driven configuration
//! - [`session`] - explicit session context, replaced wholesale on login/logout
//! - [`store`] - durable slot persistence (JSON files, atomic replace)
//! - [`remote`] - auth, catalog, and cart/wishlist HTTP clients
//! - [`sync`] - the cart/wishlist synchronizer
//! - [`view`] - presentation adapter for product cards
//!
//! # Example
//!
//! ```rust,ignore
//! use bramble_client::{ClientConfig, Session, SlotStore, Synchronizer};
//! use bramble_client::remote::{AuthClient, HttpMutationClient};
//! use bramble_core::{ProductId, Quantity, Slot};
//!
//! let config = ClientConfig::from_env()?;
//! let auth = AuthClient::new(&config.user_service_url);
//! let token = auth.login("shopper@example.com", "hunter2!").await?;
//!
//! let sync = Synchronizer::new(
//!     Session::authenticated(token),
//!     SlotStore::open(&config.state_dir)?,
//!     HttpMutationClient::new(&config.user_service_url),
//!     config.reconcile_policy,
//! );
//! sync.request_add(Slot::Cart, &ProductId::new("p1"), Quantity::new(2)).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod remote;
pub mod session;
pub mod store;
pub mod sync;
pub mod view;

pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, StoreError};
pub use session::Session;
pub use store::SlotStore;
pub use sync::{MutationOutcome, ReconcilePolicy, Synchronizer};
pub use view::{ProductView, QuantityPicker};
