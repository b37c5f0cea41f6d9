//! Integration tests for Bramble.
//!
//! # Running Tests
//!
//! ```bash
//! # Point the tests at running services
//! export BRAMBLE_USER_SERVICE_URL=http://localhost:4000
//! export BRAMBLE_CATALOG_SERVICE_URL=http://localhost:4100
//! export BRAMBLE_TEST_EMAIL=shopper@example.com
//! export BRAMBLE_TEST_PASSWORD='correct horse'
//!
//! # Run the ignored live-service tests
//! cargo test -p bramble-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - login, catalog fetch, cart/wishlist round trips
//!
//! The unit-level behavior of the synchronizer, store, and clients is
//! covered by colocated tests in `bramble-client`; this crate only holds
//! flows that need live services.

#![cfg_attr(not(test), forbid(unsafe_code))]
