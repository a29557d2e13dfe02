//! Order placement route handler.
//!
//! Two guards, then submit: an empty cart is a silent no-op, a blank address
//! gets the one user-visible validation error, anything else goes upstream.
//! A failed submission is logged only; the cart and address stay put so the
//! shopper can try again.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use greengrocer_core::{OrderError, build_order};

use crate::routes::cart::{CartShowTemplate, CartView, load_cart, save_cart};
use crate::state::AppState;

/// Order placement form data.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderForm {
    pub address: String,
}

/// Place an order from the current cart.
#[instrument(skip(state, session, form))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PlaceOrderForm>,
) -> Response {
    let mut cart = load_cart(&session).await;

    let order = match build_order(&cart, &form.address) {
        // Empty cart: no request, no flags. The submit button is disabled in
        // markup too; this guard covers a crafted post.
        Err(OrderError::EmptyCart) => return Redirect::to("/cart").into_response(),
        // Blank address: the single visible validation error.
        Err(OrderError::BlankAddress) => {
            return CartShowTemplate {
                cart: CartView::from(&cart),
                address: form.address,
                address_error: true,
                order_success: false,
            }
            .into_response();
        }
        Ok(order) => order,
    };

    match state.catalog().place_order(&order).await {
        Ok(()) => {
            tracing::info!("Order placed successfully");
            cart.clear();
            save_cart(&session, &cart).await;

            CartShowTemplate {
                cart: CartView::from(&cart),
                address: String::new(),
                address_error: false,
                order_success: true,
            }
            .into_response()
        }
        Err(e) => {
            // Logged only; the cart and address survive for a retry.
            tracing::error!("Error placing order: {e}");
            CartShowTemplate {
                cart: CartView::from(&cart),
                address: form.address,
                address_error: false,
                order_success: false,
            }
            .into_response()
        }
    }
}
