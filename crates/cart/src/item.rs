//! Cart line items.

use avant_core::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Selected size used when the caller does not specify one.
pub const DEFAULT_SELECTED_SIZE: &str = "medium";

/// One line in the cart.
///
/// A line is uniquely identified by the pair (product id, selected size):
/// adding the same product in the same size merges into the existing line,
/// while a different size produces a distinct line. The quantity is always
/// at least 1 - an update that would drop it below deletes the line instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The catalog product this line was added from.
    #[serde(flatten)]
    pub product: Product,
    /// Number of units, >= 1.
    pub quantity: u32,
    /// Size the customer picked, independent of the product's layout hint.
    pub selected_size: String,
}

impl CartItem {
    /// Create a fresh line for `product` with quantity 1.
    #[must_use]
    pub fn new(product: Product, selected_size: impl Into<String>) -> Self {
        Self {
            product,
            quantity: 1,
            selected_size: selected_size.into(),
        }
    }

    /// Whether this line matches the (product id, selected size) identity key.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, selected_size: &str) -> bool {
        self.product.id == *product_id && self.selected_size == selected_size
    }

    /// Price of this line: unit amount times quantity.
    ///
    /// A malformed price string contributes zero (see
    /// [`avant_core::DisplayPrice::amount`]).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.amount() * Decimal::from(self.quantity)
    }
}

/// Sum of line totals across `items`.
#[must_use]
pub fn subtotal(items: &[CartItem]) -> Decimal {
    items.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use avant_core::{DisplayPrice, LayoutSize};

    fn product(id: &str, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            category: "Basics".to_string(),
            price: DisplayPrice::from(price),
            image: String::new(),
            size: LayoutSize::Medium,
        }
    }

    #[test]
    fn test_subtotal_example() {
        // $2,400 x 1 + $850 x 2 = $4,100
        let coat = CartItem::new(product("1", "$2,400"), "medium");
        let mut trousers = CartItem::new(product("2", "$850"), "medium");
        trousers.quantity = 2;

        assert_eq!(subtotal(&[coat, trousers]), Decimal::from(4100));
    }

    #[test]
    fn test_malformed_price_contributes_zero() {
        let mut line = CartItem::new(product("1", "price on request"), "medium");
        line.quantity = 3;
        assert_eq!(line.line_total(), Decimal::ZERO);

        let priced = CartItem::new(product("2", "$850"), "medium");
        assert_eq!(subtotal(&[line, priced]), Decimal::from(850));
    }

    #[test]
    fn test_serialized_line_is_flat() {
        let line = CartItem::new(product("1", "$2,400"), "large");
        let value = serde_json::to_value(&line).unwrap();

        // Product fields are flattened beside the line's own fields so the
        // durable snapshot stays a flat array of line objects.
        assert_eq!(value["id"], "1");
        assert_eq!(value["price"], "$2,400");
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["selected_size"], "large");
    }
}
