//! Catalog product types.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::DisplayPrice;

/// Grid layout hint for a product card.
///
/// This is a presentation attribute of the catalog entry, not a wearable
/// size; the size a customer picks when adding to the cart is a free-form
/// string carried on the cart line instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutSize {
    Small,
    #[default]
    Medium,
    Large,
    Tall,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque unique identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Category label (e.g. "Outerwear").
    pub category: String,
    /// Display price string, e.g. `"$2,400"`.
    pub price: DisplayPrice,
    /// Image URI.
    pub image: String,
    /// Grid layout hint.
    pub size: LayoutSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new("1"),
            title: "Monolith Coat".to_string(),
            category: "Outerwear".to_string(),
            price: DisplayPrice::from("$2,400"),
            image: "https://images.example.com/monolith.jpg".to_string(),
            size: LayoutSize::Tall,
        }
    }

    #[test]
    fn test_layout_size_serde_lowercase() {
        let json = serde_json::to_string(&LayoutSize::Tall).expect("serialize");
        assert_eq!(json, "\"tall\"");
        let back: LayoutSize = serde_json::from_str("\"small\"").expect("deserialize");
        assert_eq!(back, LayoutSize::Small);
    }

    #[test]
    fn test_product_round_trip() {
        let product = sample();
        let json = serde_json::to_string(&product).expect("serialize");
        let back: Product = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, product);
    }
}
