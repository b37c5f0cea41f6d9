//! Product catalog client.
//!
//! Read side: `GET /products`, cached with `moka` for 5 minutes. Write side
//! (seller flow): create and update, both of which invalidate the cached
//! listing. Image upload to the asset host is not handled here; drafts carry
//! an already-hosted URL.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, instrument};
use url::Url;

use bramble_core::{Product, ProductDraft, ProductId};

use crate::error::ApiError;
use crate::session::Session;

use super::{Ack, base_str, bearer, decode_json, expect_ack};

const CATALOG_CACHE_KEY: &str = "products";

/// Client for the catalog service.
///
/// Cheaply cloneable; the HTTP connection pool and cache are shared.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base: String,
    cache: Cache<&'static str, Vec<Product>>,
}

impl CatalogClient {
    /// Create a client for the catalog service at `base`.
    #[must_use]
    pub fn new(base: &Url) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base: base_str(base),
                cache,
            }),
        }
    }

    /// Fetch the current product listing.
    ///
    /// Gated on the session holding a credential; no retry on failure.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` when the session has no token, otherwise the
    /// remote failure.
    #[instrument(skip(self, session))]
    pub async fn fetch_catalog(&self, session: &Session) -> Result<Vec<Product>, ApiError> {
        let token = session.require_token()?;

        if let Some(products) = self.inner.cache.get(CATALOG_CACHE_KEY).await {
            debug!("cache hit for catalog");
            return Ok(products);
        }

        let response = self
            .inner
            .client
            .get(format!("{}/products", self.inner.base))
            .header(AUTHORIZATION, bearer(token))
            .send()
            .await?;

        let products: Vec<Product> = decode_json(response, "catalog").await?;

        self.inner
            .cache
            .insert(CATALOG_CACHE_KEY, products.clone())
            .await;

        Ok(products)
    }

    /// Fetch a single product, for the seller edit flow.
    ///
    /// # Errors
    ///
    /// `NotFound` when the product no longer exists.
    #[instrument(skip(self, session), fields(product_id = %id))]
    pub async fn get_product(
        &self,
        id: &ProductId,
        session: &Session,
    ) -> Result<Product, ApiError> {
        let token = session.require_token()?;

        let response = self
            .inner
            .client
            .get(format!("{}/product/{id}", self.inner.base))
            .header(AUTHORIZATION, bearer(token))
            .send()
            .await?;

        decode_json(response, &format!("product {id}")).await
    }

    /// Create a product. Invalidates the cached listing.
    ///
    /// The service enforces that only the seller role may write; a rejected
    /// write surfaces as `Unauthorized`.
    ///
    /// # Errors
    ///
    /// Returns the remote failure; nothing is cached on error.
    #[instrument(skip(self, session, draft), fields(name = %draft.name))]
    pub async fn create_product(
        &self,
        draft: &ProductDraft,
        session: &Session,
    ) -> Result<Ack, ApiError> {
        let token = session.require_token()?;

        let response = self
            .inner
            .client
            .post(format!("{}/product/create", self.inner.base))
            .header(AUTHORIZATION, bearer(token))
            .json(draft)
            .send()
            .await?;

        let ack = expect_ack(response, "create product").await?;
        self.inner.cache.invalidate(CATALOG_CACHE_KEY).await;
        Ok(ack)
    }

    /// Update an existing product. Invalidates the cached listing.
    ///
    /// # Errors
    ///
    /// Returns the remote failure; nothing is cached on error.
    #[instrument(skip(self, session, draft), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
        session: &Session,
    ) -> Result<Ack, ApiError> {
        let token = session.require_token()?;

        let response = self
            .inner
            .client
            .put(format!("{}/product/{id}", self.inner.base))
            .header(AUTHORIZATION, bearer(token))
            .json(draft)
            .send()
            .await?;

        let ack = expect_ack(response, "update product").await?;
        self.inner.cache.invalidate(CATALOG_CACHE_KEY).await;
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_catalog_without_credential_fails_fast() {
        let base = Url::parse("http://localhost:9").expect("static url");
        let client = CatalogClient::new(&base);

        // No credential: the guard trips before any network I/O, so the
        // unroutable port above is never touched.
        let err = client
            .fetch_catalog(&Session::anonymous())
            .await
            .expect_err("anonymous fetch must fail");
        assert!(matches!(err, ApiError::Unauthenticated));
    }
}
