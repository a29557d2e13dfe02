//! Core types for Greengrocer.
//!
//! This module provides the data model shared by the storefront and admin
//! binaries: catalog products, editable drafts, the shopper's cart, and the
//! order payload sent to the catalog API.

pub mod cart;
pub mod id;
pub mod order;
pub mod product;

pub use cart::{Cart, CartItem, clamp_quantity};
pub use id::*;
pub use order::{OrderError, OrderLine, OrderRequest, build_order};
pub use product::{MIN_PRICE, NewProduct, Product, ProductDraft};
