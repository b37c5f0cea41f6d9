//! Product wire types for the catalog service.
//!
//! Field names on the wire are the catalog service's JSON (`_id`, `desc`,
//! `img`, `type`, ...); serde renames keep the Rust names readable.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// Product categories accepted by the catalog service.
pub const CATEGORIES: &[&str] = &[
    "Music",
    "Fashion",
    "Kitchen",
    "Health Care",
    "Books and Stationery",
    "Sports",
    "Games",
    "Beauty",
    "Jewelry",
    "Groceries",
    "Baby Products",
    "Hardware",
    "Office Supplies",
    "Musical Instruments",
    "Furniture",
    "Art and Craft",
    "Industrial and Scientific",
    "Video Games",
];

/// A catalog product as returned by `GET /products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque catalog identifier.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(rename = "desc")]
    pub description: String,
    /// URL of the hosted product image.
    #[serde(rename = "img")]
    pub image_url: String,
    /// Category name (one of [`CATEGORIES`]).
    #[serde(rename = "type")]
    pub category: String,
    /// Units in stock.
    pub stock: i64,
    /// Price in minor currency units (e.g. cents).
    #[serde(rename = "price")]
    pub price_minor_units: i64,
    /// Whether the product is currently purchasable.
    pub available: bool,
}

/// Payload for creating or updating a product (seller flow).
///
/// Identical to [`Product`] minus the server-assigned ID. The image must
/// already be hosted; uploading to the asset host is the embedding
/// application's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(rename = "desc")]
    pub description: String,
    /// URL of the hosted product image.
    #[serde(rename = "img")]
    pub image_url: String,
    /// Category name (one of [`CATEGORIES`]).
    #[serde(rename = "type")]
    pub category: String,
    /// Units in stock.
    pub stock: i64,
    /// Price in minor currency units.
    #[serde(rename = "price")]
    pub price_minor_units: i64,
    /// Whether the product is currently purchasable.
    pub available: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_wire_field_names() {
        let json = r#"{
            "_id": "6741f2a9c1",
            "name": "Walnut Chair",
            "desc": "A chair made of walnut",
            "img": "https://assets.example.com/chair.jpg",
            "type": "Furniture",
            "stock": 12,
            "price": 14999,
            "available": true
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new("6741f2a9c1"));
        assert_eq!(product.description, "A chair made of walnut");
        assert_eq!(product.category, "Furniture");
        assert_eq!(product.price_minor_units, 14999);
        assert!(product.available);
    }

    #[test]
    fn test_product_roundtrips_through_wire_names() {
        let product = Product {
            id: ProductId::new("p1"),
            name: "Mug".to_string(),
            description: "Stoneware mug".to_string(),
            image_url: "https://assets.example.com/mug.jpg".to_string(),
            category: "Kitchen".to_string(),
            stock: 3,
            price_minor_units: 1250,
            available: false,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["_id"], "p1");
        assert_eq!(value["desc"], "Stoneware mug");
        assert_eq!(value["img"], "https://assets.example.com/mug.jpg");
        assert_eq!(value["type"], "Kitchen");
        assert_eq!(value["price"], 1250);

        let back: Product = serde_json::from_value(value).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_draft_has_no_id_field() {
        let draft = ProductDraft {
            name: "Mug".to_string(),
            description: "Stoneware mug".to_string(),
            image_url: "https://assets.example.com/mug.jpg".to_string(),
            category: "Kitchen".to_string(),
            stock: 3,
            price_minor_units: 1250,
            available: true,
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["type"], "Kitchen");
    }
}
