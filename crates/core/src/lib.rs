//! Greengrocer Core - Shared types library.
//!
//! This crate provides common types used across all Greengrocer components:
//! - `storefront` - Public-facing shop (catalog, cart, order placement)
//! - `admin` - Internal product management panel
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients. The catalog API owns all persistence and pricing authority;
//! everything here is the presentation layer's working state.
//!
//! # Modules
//!
//! - [`types`] - Products, drafts, the cart, and the order payload

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
