//! Integration tests for Greengrocer.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the catalog API on port 8080, then the two servers
//! cargo run -p greengrocer-storefront
//! cargo run -p greengrocer-admin
//!
//! # Run the ignored tests against them
//! cargo test -p greengrocer-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Session cart and order placement tests
//! - `admin_products` - Product management tests
//!
//! Base URLs are configurable via `STOREFRONT_BASE_URL` and `ADMIN_BASE_URL`.
