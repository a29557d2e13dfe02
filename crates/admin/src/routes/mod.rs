//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                      - Product list with edit/delete controls
//!                               and the new-product form
//! GET  /health                - Health check
//!
//! # Products
//! GET  /products/{id}/edit    - Edit form (a draft copy of the product)
//! POST /products/{id}         - Save the edited draft upstream
//! POST /products/{id}/delete  - Delete the product upstream
//! POST /products              - Create a product from the new-product form
//! ```

pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create))
        .route("/{id}", post(products::save))
        .route("/{id}/edit", get(products::edit))
        .route("/{id}/delete", post(products::delete))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .nest("/products", product_routes())
}
