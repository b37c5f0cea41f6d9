//! Bramble Core - Shared types library.
//!
//! This crate provides common types used across all Bramble components:
//! - `client` - Storefront client library (remote services, persistence, sync)
//! - `cli` - Command-line shell over the client library
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no filesystem access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, slots, quantities, and credentials

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
