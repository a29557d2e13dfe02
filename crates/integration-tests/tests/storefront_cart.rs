//! Integration tests for the storefront cart and checkout flow.
//!
//! These tests require:
//! - The catalog API running on port 8080 with at least one product
//! - The storefront server running (cargo run -p greengrocer-storefront)
//!
//! Run with: cargo test -p greengrocer-integration-tests -- --ignored

use reqwest::{Client, StatusCode, redirect::Policy};

/// Base URL for the storefront (configurable via environment).
fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create a client that keeps session cookies across requests.
fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Create a session client that does not follow redirects, for asserting
/// on the redirect responses the cart handlers return.
fn no_redirect_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Test helper: pull the first product id out of the listing markup.
///
/// The add-to-cart forms carry `name="product_id" value="{id}"`.
fn first_product_id(listing: &str) -> Option<i32> {
    let marker = "name=\"product_id\" value=\"";
    let start = listing.find(marker)? + marker.len();
    let end = listing[start..].find('"')? + start;
    listing[start..end].parse().ok()
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and catalog API"]
async fn test_home_lists_products() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get product listing");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");

    assert!(body.contains("Add to Cart"));
    assert!(first_product_id(&body).is_some());
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_health_check() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to get health check");

    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Cart Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and catalog API"]
async fn test_add_to_cart_redirects_to_listing() {
    let client = no_redirect_client();
    let base_url = storefront_base_url();

    let listing = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get product listing")
        .text()
        .await
        .expect("Failed to read listing");
    let product_id = first_product_id(&listing).expect("No products in listing");

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", product_id.to_string())])
        .send()
        .await
        .expect("Failed to add to cart");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/");
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog API"]
async fn test_add_unknown_product_leaves_cart_empty() {
    let client = no_redirect_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", "999999")])
        .send()
        .await
        .expect("Failed to post add form");

    // Same redirect as a successful add; the bogus id is dropped.
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/");

    let cart = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .text()
        .await
        .expect("Failed to read cart");

    assert!(cart.contains("Your cart is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog API"]
async fn test_adding_same_product_twice_increments_quantity() {
    let client = session_client();
    let base_url = storefront_base_url();

    let listing = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get product listing")
        .text()
        .await
        .expect("Failed to read listing");
    let product_id = first_product_id(&listing).expect("No products in listing");

    for _ in 0..2 {
        client
            .post(format!("{base_url}/cart/add"))
            .form(&[("product_id", product_id.to_string())])
            .send()
            .await
            .expect("Failed to add to cart");
    }

    let cart = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .text()
        .await
        .expect("Failed to read cart");

    // One line item with quantity 2, not two line items.
    assert!(cart.contains("value=\"2\""));
    assert_eq!(cart.matches("name=\"product_id\"").count(), 2); // update + remove forms
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog API"]
async fn test_update_quantity_clamps_to_one() {
    let client = session_client();
    let base_url = storefront_base_url();

    let listing = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get product listing")
        .text()
        .await
        .expect("Failed to read listing");
    let product_id = first_product_id(&listing).expect("No products in listing");

    client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", product_id.to_string())])
        .send()
        .await
        .expect("Failed to add to cart");

    let resp = client
        .post(format!("{base_url}/cart/update"))
        .form(&[
            ("product_id", product_id.to_string()),
            ("quantity", "0".to_string()),
        ])
        .send()
        .await
        .expect("Failed to update quantity");
    assert_eq!(resp.status(), StatusCode::OK);

    let cart = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .text()
        .await
        .expect("Failed to read cart");

    assert!(cart.contains("value=\"1\""));
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog API"]
async fn test_remove_empties_cart() {
    let client = session_client();
    let base_url = storefront_base_url();

    let listing = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get product listing")
        .text()
        .await
        .expect("Failed to read listing");
    let product_id = first_product_id(&listing).expect("No products in listing");

    client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", product_id.to_string())])
        .send()
        .await
        .expect("Failed to add to cart");

    client
        .post(format!("{base_url}/cart/remove"))
        .form(&[("product_id", product_id.to_string())])
        .send()
        .await
        .expect("Failed to remove from cart");

    let cart = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .text()
        .await
        .expect("Failed to read cart");

    assert!(cart.contains("Your cart is empty"));
}

// ============================================================================
// Checkout Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and catalog API"]
async fn test_order_with_blank_address_shows_error() {
    let client = session_client();
    let base_url = storefront_base_url();

    let listing = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get product listing")
        .text()
        .await
        .expect("Failed to read listing");
    let product_id = first_product_id(&listing).expect("No products in listing");

    client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", product_id.to_string())])
        .send()
        .await
        .expect("Failed to add to cart");

    let resp = client
        .post(format!("{base_url}/order"))
        .form(&[("address", "   ")])
        .send()
        .await
        .expect("Failed to place order");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Address is required"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_order_with_empty_cart_redirects_silently() {
    let client = no_redirect_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/order"))
        .form(&[("address", "1 Main St")])
        .send()
        .await
        .expect("Failed to place order");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/cart");
}

#[tokio::test]
#[ignore = "Requires running storefront server and catalog API"]
async fn test_successful_order_clears_cart() {
    let client = session_client();
    let base_url = storefront_base_url();

    let listing = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get product listing")
        .text()
        .await
        .expect("Failed to read listing");
    let product_id = first_product_id(&listing).expect("No products in listing");

    client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", product_id.to_string())])
        .send()
        .await
        .expect("Failed to add to cart");

    let resp = client
        .post(format!("{base_url}/order"))
        .form(&[("address", "1 Main St, Springfield")])
        .send()
        .await
        .expect("Failed to place order");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Order placed successfully"));
    assert!(body.contains("Your cart is empty"));
}
