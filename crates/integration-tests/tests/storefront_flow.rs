//! Live-service storefront flow tests.
//!
//! These tests require:
//! - A running user service (`BRAMBLE_USER_SERVICE_URL`)
//! - A running catalog service (`BRAMBLE_CATALOG_SERVICE_URL`)
//! - A seeded test account (`BRAMBLE_TEST_EMAIL`, `BRAMBLE_TEST_PASSWORD`)
//!
//! Run with: `cargo test -p bramble-integration-tests -- --ignored`

use url::Url;

use bramble_client::remote::{AuthClient, CatalogClient, HttpMutationClient};
use bramble_client::{ReconcilePolicy, Session, SlotStore, Synchronizer};
use bramble_core::{Quantity, Slot};

/// Base URL for the user service (configurable via environment).
fn user_service_url() -> Url {
    let raw = std::env::var("BRAMBLE_USER_SERVICE_URL")
        .unwrap_or_else(|_| "http://localhost:4000".to_string());
    Url::parse(&raw).expect("invalid BRAMBLE_USER_SERVICE_URL")
}

/// Base URL for the catalog service (configurable via environment).
fn catalog_service_url() -> Url {
    let raw = std::env::var("BRAMBLE_CATALOG_SERVICE_URL")
        .unwrap_or_else(|_| "http://localhost:4100".to_string());
    Url::parse(&raw).expect("invalid BRAMBLE_CATALOG_SERVICE_URL")
}

/// Log the seeded test account in and return its session.
async fn authenticated_session() -> Session {
    let email = std::env::var("BRAMBLE_TEST_EMAIL").expect("BRAMBLE_TEST_EMAIL not set");
    let password = std::env::var("BRAMBLE_TEST_PASSWORD").expect("BRAMBLE_TEST_PASSWORD not set");

    let auth = AuthClient::new(&user_service_url());
    let token = auth
        .login(&email, &password)
        .await
        .expect("login failed for test account");
    Session::authenticated(token)
}

#[tokio::test]
#[ignore = "Requires running user and catalog services"]
async fn test_login_and_profile() {
    let session = authenticated_session().await;
    let auth = AuthClient::new(&user_service_url());

    let profile = auth.profile(&session).await.expect("profile fetch failed");
    assert_eq!(
        profile.email,
        std::env::var("BRAMBLE_TEST_EMAIL").expect("BRAMBLE_TEST_EMAIL not set")
    );
}

#[tokio::test]
#[ignore = "Requires running user and catalog services"]
async fn test_catalog_lists_products() {
    let session = authenticated_session().await;
    let catalog = CatalogClient::new(&catalog_service_url());

    let products = catalog
        .fetch_catalog(&session)
        .await
        .expect("catalog fetch failed");

    // Seeded catalogs are never empty; every product carries an ID.
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| !p.id.as_str().is_empty()));
}

#[tokio::test]
#[ignore = "Requires running user and catalog services"]
async fn test_cart_add_then_remove_roundtrip() {
    let session = authenticated_session().await;
    let catalog = CatalogClient::new(&catalog_service_url());
    let products = catalog
        .fetch_catalog(&session)
        .await
        .expect("catalog fetch failed");
    let product = products.first().expect("seeded catalog is empty");

    let state_dir = tempfile::tempdir().expect("tempdir");
    let sync = Synchronizer::new(
        session,
        SlotStore::open(state_dir.path()).expect("state dir"),
        HttpMutationClient::new(&user_service_url()),
        ReconcilePolicy::LocalOnly,
    );

    sync.request_add(Slot::Cart, &product.id, Quantity::new(1))
        .await
        .expect("cart add failed");
    assert!(sync.is_member(Slot::Cart, &product.id));

    sync.request_remove(Slot::Cart, &product.id)
        .await
        .expect("cart remove failed");
    assert!(!sync.is_member(Slot::Cart, &product.id));
}

#[tokio::test]
#[ignore = "Requires running user and catalog services"]
async fn test_wishlist_membership_survives_resync() {
    let session = authenticated_session().await;
    let catalog = CatalogClient::new(&catalog_service_url());
    let products = catalog
        .fetch_catalog(&session)
        .await
        .expect("catalog fetch failed");
    let product = products.first().expect("seeded catalog is empty");

    let state_dir = tempfile::tempdir().expect("tempdir");
    let store = SlotStore::open(state_dir.path()).expect("state dir");
    let remote = HttpMutationClient::new(&user_service_url());

    let sync = Synchronizer::new(
        session.clone(),
        store.clone(),
        remote.clone(),
        ReconcilePolicy::RemoteWins,
    );
    sync.request_add(Slot::Wishlist, &product.id, Quantity::MIN)
        .await
        .expect("wishlist add failed");

    // A fresh synchronizer reconciling against the remote store sees the add.
    let fresh = Synchronizer::new(session, store, remote, ReconcilePolicy::RemoteWins);
    fresh
        .reconcile(Slot::Wishlist)
        .await
        .expect("reconcile failed");
    assert!(fresh.is_member(Slot::Wishlist, &product.id));

    // Leave the remote store as we found it.
    fresh
        .request_remove(Slot::Wishlist, &product.id)
        .await
        .expect("wishlist cleanup failed");
}
