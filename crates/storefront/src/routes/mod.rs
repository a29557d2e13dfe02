//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /            - Catalog listing with add-to-cart controls
//! GET  /health      - Health check
//!
//! # Cart
//! GET  /cart        - Cart page (items, quantities, total, address form)
//! POST /cart/add    - Add a product to the cart
//! POST /cart/update - Change an entry's quantity
//! POST /cart/remove - Remove an entry
//!
//! # Order
//! POST /order       - Place the order (guards, then submit upstream)
//! ```

pub mod cart;
pub mod checkout;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog listing
        .route("/", get(home::home))
        // Cart routes
        .nest("/cart", cart_routes())
        // Order placement
        .route("/order", post(checkout::place_order))
}
