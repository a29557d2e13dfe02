//! Order placement payload and guards.

use serde::Serialize;
use thiserror::Error;

use crate::types::cart::Cart;
use crate::types::id::ProductId;

/// One line of an order: a product reference and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// The order payload sent to the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub products: Vec<OrderLine>,
    /// Free-text shipping address, passed through verbatim.
    pub customer_info: String,
}

/// Why an order was not submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Nothing to order. The caller treats this as a silent no-op.
    #[error("cart is empty")]
    EmptyCart,

    /// The shipping address is blank or whitespace-only. This is the single
    /// user-visible validation error in the whole flow.
    #[error("shipping address is required")]
    BlankAddress,
}

/// Apply the order guards and build the submission payload.
///
/// Guards run in order: an empty cart wins over a blank address.
///
/// # Errors
///
/// Returns [`OrderError::EmptyCart`] or [`OrderError::BlankAddress`] when a
/// guard fails; no request must be sent in either case.
pub fn build_order(cart: &Cart, address: &str) -> Result<OrderRequest, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }
    if address.trim().is_empty() {
        return Err(OrderError::BlankAddress);
    }

    Ok(OrderRequest {
        products: cart
            .items()
            .iter()
            .map(|item| OrderLine {
                product_id: item.product.id,
                quantity: item.quantity,
            })
            .collect(),
        customer_info: address.to_string(),
    })
}
