//! Catalog products and editable drafts.
//!
//! The catalog API is the source of truth; the binaries only hold cached
//! copies. Prices travel as JSON strings on the wire (the backend stores them
//! as text), so [`Product::price`] is a `String` parsed to a
//! [`Decimal`] at calculation and display time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// The minimum allowed product price. Edits below this are coerced up.
pub const MIN_PRICE: Decimal = Decimal::ONE;

/// A product as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price in the shop currency, as the raw wire string.
    pub price: String,
    pub category: String,
}

impl Product {
    /// Parse the price for arithmetic. Unparsable prices count as zero.
    #[must_use]
    pub fn price_amount(&self) -> Decimal {
        self.price.trim().parse().unwrap_or(Decimal::ZERO)
    }
}

/// Creation payload for the catalog API. The backend assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

/// An in-progress, not-yet-submitted copy of a product.
///
/// Used both for editing an existing product and for the new-product form.
/// All fields are strings because they mirror form inputs; the only
/// correction applied is the price minimum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

impl ProductDraft {
    /// Generic name/value update against the draft.
    ///
    /// A `price` value that parses below [`MIN_PRICE`] is stored as `"1"`.
    /// Everything else passes through unmodified; in particular, non-numeric
    /// price text is accepted here and left for the backend to reject.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name {
            "name" => self.name = value,
            "description" => self.description = value,
            "price" => self.price = clamp_price(value),
            "category" => self.category = value,
            // Unknown fields are dropped; the form layer controls the names.
            _ => {}
        }
    }

    /// The redundant pre-submission minimum check used by the create flow.
    ///
    /// False when the price parses below the minimum or is empty. Non-numeric
    /// text passes, matching the loose comparison in the form layer.
    #[must_use]
    pub fn price_meets_minimum(&self) -> bool {
        match self.price.trim().parse::<Decimal>() {
            Ok(price) => price >= MIN_PRICE,
            Err(_) => !self.price.trim().is_empty(),
        }
    }

    /// Build the full update payload for an existing product.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
        }
    }

    /// Build the creation payload.
    #[must_use]
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            category: product.category.clone(),
        }
    }
}

/// Coerce a price edit below the minimum to `"1"`; pass anything else through.
fn clamp_price(value: String) -> String {
    match value.trim().parse::<Decimal>() {
        Ok(price) if price < MIN_PRICE => "1".to_string(),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Blood Orange".to_string(),
            description: "Sicilian, by the kilo".to_string(),
            price: "4.50".to_string(),
            category: "Fruit".to_string(),
        }
    }

    #[test]
    fn test_price_amount_parses() {
        assert_eq!(product().price_amount(), Decimal::new(450, 2));
    }

    #[test]
    fn test_price_amount_unparsable_is_zero() {
        let mut p = product();
        p.price = "two quid".to_string();
        assert_eq!(p.price_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_set_field_price_below_minimum_is_clamped() {
        let mut draft = ProductDraft::default();
        draft.set_field("price", "0");
        assert_eq!(draft.price, "1");
        draft.set_field("price", "-5");
        assert_eq!(draft.price, "1");
        draft.set_field("price", "0.99");
        assert_eq!(draft.price, "1");
    }

    #[test]
    fn test_set_field_price_at_or_above_minimum_passes_through() {
        let mut draft = ProductDraft::default();
        draft.set_field("price", "1");
        assert_eq!(draft.price, "1");
        draft.set_field("price", "19.99");
        assert_eq!(draft.price, "19.99");
    }

    #[test]
    fn test_set_field_non_numeric_price_passes_through() {
        let mut draft = ProductDraft::default();
        draft.set_field("price", "abc");
        assert_eq!(draft.price, "abc");
        draft.set_field("price", "");
        assert_eq!(draft.price, "");
    }

    #[test]
    fn test_set_field_other_fields() {
        let mut draft = ProductDraft::default();
        draft.set_field("name", "Kale");
        draft.set_field("description", "Curly");
        draft.set_field("category", "Veg");
        draft.set_field("colour", "green"); // unknown, ignored
        assert_eq!(draft.name, "Kale");
        assert_eq!(draft.description, "Curly");
        assert_eq!(draft.category, "Veg");
    }

    #[test]
    fn test_price_meets_minimum() {
        let mut draft = ProductDraft::default();
        assert!(!draft.price_meets_minimum(), "empty price fails the check");
        draft.price = "0".to_string();
        assert!(!draft.price_meets_minimum());
        draft.price = "1".to_string();
        assert!(draft.price_meets_minimum());
        draft.price = "19.99".to_string();
        assert!(draft.price_meets_minimum());
        // Non-numeric text slips through; the backend owns real validation.
        draft.price = "abc".to_string();
        assert!(draft.price_meets_minimum());
    }

    #[test]
    fn test_draft_roundtrip_to_product() {
        let draft = ProductDraft::from(&product());
        let rebuilt = draft.into_product(ProductId::new(1));
        assert_eq!(rebuilt, product());
    }

    #[test]
    fn test_product_wire_format() {
        let json = serde_json::to_value(product()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Blood Orange",
                "description": "Sicilian, by the kilo",
                "price": "4.50",
                "category": "Fruit",
            })
        );
    }

    #[test]
    fn test_new_product_has_no_id() {
        let new = ProductDraft::from(&product()).into_new_product();
        let json = serde_json::to_value(new).expect("serialize");
        assert!(json.get("id").is_none());
        assert_eq!(json["price"], "4.50");
    }
}
