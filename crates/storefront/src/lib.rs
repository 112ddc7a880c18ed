//! Ratannam Gold storefront library.
//!
//! The content store (banners, categories, trending picks, about, contact,
//! reviews), the product catalog, and the published metal rates, behind an
//! asynchronous facade and a JSON API. The binary in `main.rs` serves the
//! router built here; the integration tests drive the same router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod rates;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router with request tracing.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
