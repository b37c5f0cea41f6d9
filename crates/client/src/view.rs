//! Presentation adapter: collaborator-facing derived state.
//!
//! No rendering lives here. These are the per-product booleans and display
//! strings a UI binds to when drawing a product card, plus the local
//! quantity stepper for the add-to-cart gesture.

use bramble_core::{Product, ProductId, Quantity, Slot};

use crate::remote::MutationApi;
use crate::sync::Synchronizer;

/// Display state for one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    /// Product identifier, for wiring actions back to the synchronizer.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Hosted image URL.
    pub image_url: String,
    /// Category name.
    pub category: String,
    /// Price formatted from minor units, e.g. `"$149.99"`.
    pub price: String,
    /// Whether the product is currently purchasable.
    pub available: bool,
    /// Confirmed cart membership.
    pub in_cart: bool,
    /// Confirmed wishlist membership.
    pub in_wishlist: bool,
    /// A cart mutation is in flight for this product.
    pub cart_pending: bool,
    /// A wishlist mutation is in flight for this product.
    pub wishlist_pending: bool,
}

impl ProductView {
    /// Derive display state for one product from the synchronizer.
    #[must_use]
    pub fn derive<M: MutationApi>(product: &Product, sync: &Synchronizer<M>) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            category: product.category.clone(),
            price: format_price(product.price_minor_units),
            available: product.available,
            in_cart: sync.is_member(Slot::Cart, &product.id),
            in_wishlist: sync.is_member(Slot::Wishlist, &product.id),
            cart_pending: sync.is_pending(Slot::Cart, &product.id),
            wishlist_pending: sync.is_pending(Slot::Wishlist, &product.id),
        }
    }
}

/// Format minor currency units as a price string.
fn format_price(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

/// Local quantity stepper state for the add-to-cart gesture.
///
/// Not part of the synchronized state; the value is consumed by
/// [`Synchronizer::request_add`] when the user commits the add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuantityPicker {
    value: Quantity,
}

impl QuantityPicker {
    /// A picker at the default quantity of 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current quantity.
    #[must_use]
    pub const fn value(&self) -> Quantity {
        self.value
    }

    /// Step up.
    pub const fn increment(&mut self) {
        self.value = self.value.saturating_increment();
    }

    /// Step down, stopping at the floor of 1.
    pub const fn decrement(&mut self) {
        self.value = self.value.saturating_decrement();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use bramble_core::AccessToken;

    use crate::error::ApiError;
    use crate::remote::Ack;
    use crate::session::Session;
    use crate::store::SlotStore;
    use crate::sync::ReconcilePolicy;

    use super::*;

    /// Backend that confirms everything, for driving the synchronizer.
    struct OkBackend;

    impl MutationApi for OkBackend {
        async fn add_item(
            &self,
            _slot: Slot,
            _id: &ProductId,
            _quantity: Quantity,
            _token: &AccessToken,
        ) -> Result<Ack, ApiError> {
            Ok(Ack::default())
        }

        async fn remove_item(
            &self,
            _slot: Slot,
            _id: &ProductId,
            _token: &AccessToken,
        ) -> Result<Ack, ApiError> {
            Ok(Ack::default())
        }

        async fn fetch_items(
            &self,
            _slot: Slot,
            _token: &AccessToken,
        ) -> Result<HashSet<ProductId>, ApiError> {
            Ok(HashSet::new())
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: "Walnut Chair".to_string(),
            description: "A chair made of walnut".to_string(),
            image_url: "https://assets.example.com/chair.jpg".to_string(),
            category: "Furniture".to_string(),
            stock: 4,
            price_minor_units: 14999,
            available: true,
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "$0.00");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(14999), "$149.99");
        assert_eq!(format_price(-250), "-$2.50");
    }

    #[test]
    fn test_picker_respects_floor() {
        let mut picker = QuantityPicker::new();
        assert_eq!(picker.value().get(), 1);
        picker.decrement();
        assert_eq!(picker.value().get(), 1);
        picker.increment();
        picker.increment();
        assert_eq!(picker.value().get(), 3);
        picker.decrement();
        assert_eq!(picker.value().get(), 2);
    }

    #[tokio::test]
    async fn test_derive_reflects_membership() {
        let dir = tempfile::tempdir().unwrap();
        let store = SlotStore::open(dir.path()).unwrap();
        let sync = Synchronizer::new(
            Session::authenticated(AccessToken::new("tok")),
            store,
            OkBackend,
            ReconcilePolicy::LocalOnly,
        );

        let item = product("p1");
        sync.request_add(Slot::Cart, &item.id, Quantity::new(2))
            .await
            .unwrap();

        let view = ProductView::derive(&item, &sync);
        assert!(view.in_cart);
        assert!(!view.in_wishlist);
        assert!(!view.cart_pending);
        assert_eq!(view.price, "$149.99");
    }

    #[test]
    fn test_derive_on_fresh_synchronizer() {
        let dir = tempfile::tempdir().unwrap();
        let store = SlotStore::open(dir.path()).unwrap();
        let sync = Synchronizer::new(
            Session::anonymous(),
            store,
            OkBackend,
            ReconcilePolicy::LocalOnly,
        );

        let view = ProductView::derive(&product("p1"), &sync);
        assert!(!view.in_cart);
        assert!(!view.in_wishlist);
        assert!(view.available);
    }
}
