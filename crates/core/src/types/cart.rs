//! The shopper's cart.
//!
//! The cart is the working selection of products and quantities prior to
//! order submission. It lives in the shopper's session; the catalog API never
//! sees it until an order is placed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::product::Product;

/// A product in the cart together with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price_amount() * Decimal::from(self.quantity)
    }
}

/// The cart: a sequence of items, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// the cart never holds two entries for the same product id.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
    }

    /// Remove the matching entry entirely. No-op if the id is not present.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|item| item.product.id != id);
    }

    /// Replace an entry's quantity, clamped to a minimum of 1.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
            item.quantity = quantity.max(1);
        }
    }

    /// Total price: sum of price times quantity over all items.
    ///
    /// Purely derived; recomputed on every call, never cached.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every item. Used after a successful order.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Parse a quantity input, clamping to a minimum of 1.
///
/// Any value below 1, including non-positive numbers and strings that fail to
/// parse at all, becomes 1.
#[must_use]
pub fn clamp_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0).max(1)
}
