//! Cart and wishlist mutation client.
//!
//! The user service exposes symmetric per-slot endpoints keyed by product
//! ID: `POST /{slot}/add`, `POST /{slot}/remove`, and `GET /{slot}` for the
//! current remote membership. Quantity accompanies cart adds only.

use std::collections::HashSet;
use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use tracing::instrument;
use url::Url;

use bramble_core::{AccessToken, ProductId, Quantity, Slot};

use crate::error::ApiError;

use super::{Ack, base_str, bearer, decode_json, expect_ack};

/// Remote mutation backend for slot membership.
///
/// The synchronizer is generic over this trait; tests drive it with a
/// scripted in-memory backend instead of a live service.
#[allow(async_fn_in_trait)]
pub trait MutationApi {
    /// Add an item to a slot. Quantity applies to the cart only.
    async fn add_item(
        &self,
        slot: Slot,
        id: &ProductId,
        quantity: Quantity,
        token: &AccessToken,
    ) -> Result<Ack, ApiError>;

    /// Remove an item from a slot.
    async fn remove_item(
        &self,
        slot: Slot,
        id: &ProductId,
        token: &AccessToken,
    ) -> Result<Ack, ApiError>;

    /// Fetch the slot's current membership from the remote store.
    async fn fetch_items(
        &self,
        slot: Slot,
        token: &AccessToken,
    ) -> Result<HashSet<ProductId>, ApiError>;
}

impl<M: MutationApi> MutationApi for Arc<M> {
    async fn add_item(
        &self,
        slot: Slot,
        id: &ProductId,
        quantity: Quantity,
        token: &AccessToken,
    ) -> Result<Ack, ApiError> {
        (**self).add_item(slot, id, quantity, token).await
    }

    async fn remove_item(
        &self,
        slot: Slot,
        id: &ProductId,
        token: &AccessToken,
    ) -> Result<Ack, ApiError> {
        (**self).remove_item(slot, id, token).await
    }

    async fn fetch_items(
        &self,
        slot: Slot,
        token: &AccessToken,
    ) -> Result<HashSet<ProductId>, ApiError> {
        (**self).fetch_items(slot, token).await
    }
}

/// [`MutationApi`] implementation against the user service.
#[derive(Debug, Clone)]
pub struct HttpMutationClient {
    client: reqwest::Client,
    base: String,
}

#[derive(Serialize)]
struct AddBody<'a> {
    #[serde(rename = "productId")]
    product_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<u32>,
}

#[derive(Serialize)]
struct RemoveBody<'a> {
    #[serde(rename = "productId")]
    product_id: &'a str,
}

impl HttpMutationClient {
    /// Create a client for the user service at `base`.
    #[must_use]
    pub fn new(base: &Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base_str(base),
        }
    }
}

impl MutationApi for HttpMutationClient {
    #[instrument(skip(self, token), fields(slot = %slot, product_id = %id))]
    async fn add_item(
        &self,
        slot: Slot,
        id: &ProductId,
        quantity: Quantity,
        token: &AccessToken,
    ) -> Result<Ack, ApiError> {
        let body = AddBody {
            product_id: id.as_str(),
            // The wishlist endpoint has no quantity concept
            quantity: matches!(slot, Slot::Cart).then_some(quantity.get()),
        };

        let response = self
            .client
            .post(format!("{}/{slot}/add", self.base))
            .header(AUTHORIZATION, bearer(token))
            .json(&body)
            .send()
            .await?;

        expect_ack(response, "add item").await
    }

    #[instrument(skip(self, token), fields(slot = %slot, product_id = %id))]
    async fn remove_item(
        &self,
        slot: Slot,
        id: &ProductId,
        token: &AccessToken,
    ) -> Result<Ack, ApiError> {
        let body = RemoveBody {
            product_id: id.as_str(),
        };

        let response = self
            .client
            .post(format!("{}/{slot}/remove", self.base))
            .header(AUTHORIZATION, bearer(token))
            .json(&body)
            .send()
            .await?;

        expect_ack(response, "remove item").await
    }

    #[instrument(skip(self, token), fields(slot = %slot))]
    async fn fetch_items(
        &self,
        slot: Slot,
        token: &AccessToken,
    ) -> Result<HashSet<ProductId>, ApiError> {
        let response = self
            .client
            .get(format!("{}/{slot}", self.base))
            .header(AUTHORIZATION, bearer(token))
            .send()
            .await?;

        let ids: Vec<ProductId> = decode_json(response, "fetch slot members").await?;
        Ok(ids.into_iter().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_add_body_carries_quantity() {
        let body = AddBody {
            product_id: "p1",
            quantity: Some(3),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["productId"], "p1");
        assert_eq!(value["quantity"], 3);
    }

    #[test]
    fn test_wishlist_add_body_omits_quantity() {
        let body = AddBody {
            product_id: "p1",
            quantity: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("quantity").is_none());
    }

    #[test]
    fn test_remove_body_keys_by_product_id() {
        let body = RemoveBody { product_id: "p9" };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({ "productId": "p9" }));
    }
}
