//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//!
//! # Public (enabled records only)
//! GET  /api/products                    - Catalog (?featured=true, ?category=gold)
//! GET  /api/products/{id}               - Product detail
//! GET  /api/banners                     - Hero banners
//! GET  /api/categories                  - Category tiles
//! GET  /api/trending                    - Trending products, resolved
//! GET  /api/about                       - About section (null when hidden)
//! GET  /api/contact                     - Contact details (null when hidden)
//! GET  /api/reviews                     - Customer reviews
//! GET  /api/rates                       - Live metal rates
//!
//! # Admin
//! GET    /api/admin/content             - Every CMS record, disabled included
//! POST   /api/admin/products            - Add product
//! PUT    /api/admin/products/{id}       - Update product
//! DELETE /api/admin/products/{id}       - Delete product
//! POST   /api/admin/banners             - Add banner
//! PUT    /api/admin/banners/{id}        - Update banner
//! DELETE /api/admin/banners/{id}        - Delete banner
//! POST   /api/admin/categories          - Add category
//! PUT    /api/admin/categories/{id}     - Update category
//! DELETE /api/admin/categories/{id}     - Delete category
//! POST   /api/admin/reviews             - Add review
//! PUT    /api/admin/reviews/{id}        - Update review
//! DELETE /api/admin/reviews/{id}        - Delete review
//! POST   /api/admin/trending/{id}       - Mark product trending
//! PUT    /api/admin/trending/{id}       - Update trending link
//! DELETE /api/admin/trending/{id}       - Remove trending link
//! PUT    /api/admin/about               - Update about section
//! PUT    /api/admin/contact             - Update contact details
//! PUT    /api/admin/rates               - Publish metal rates
//! ```

pub mod admin;
pub mod public;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the public read routes router.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(public::products))
        .route("/products/{id}", get(public::product))
        .route("/banners", get(public::banners))
        .route("/categories", get(public::categories))
        .route("/trending", get(public::trending))
        .route("/about", get(public::about))
        .route("/contact", get(public::contact))
        .route("/reviews", get(public::reviews))
        .route("/rates", get(public::rates))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/content", get(admin::content))
        .route("/products", post(admin::add_product))
        .route(
            "/products/{id}",
            put(admin::update_product).delete(admin::delete_product),
        )
        .route("/banners", post(admin::add_banner))
        .route(
            "/banners/{id}",
            put(admin::update_banner).delete(admin::delete_banner),
        )
        .route("/categories", post(admin::add_category))
        .route(
            "/categories/{id}",
            put(admin::update_category).delete(admin::delete_category),
        )
        .route("/reviews", post(admin::add_review))
        .route(
            "/reviews/{id}",
            put(admin::update_review).delete(admin::delete_review),
        )
        .route(
            "/trending/{product_id}",
            post(admin::add_trending)
                .put(admin::update_trending)
                .delete(admin::remove_trending),
        )
        .route("/about", put(admin::update_about))
        .route("/contact", put(admin::update_contact))
        .route("/rates", put(admin::update_rates))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", public_routes())
        // Admin routes (no auth: staff access is handled outside this service)
        .nest("/api/admin", admin_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
