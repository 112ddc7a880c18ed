//! Ratannam Core - Shared types library.
//!
//! This crate provides common types used across the Ratannam Gold workspace:
//! - `storefront` - Content and catalog stores, the async API facade, and
//!   the JSON surface the public pages and the admin panel talk to
//! - `integration-tests` - End-to-end scenarios against the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no shared state, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, discounts, and
//!   catalog categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
