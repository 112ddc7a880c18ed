//! Admin endpoints for editing catalog and CMS content.
//!
//! Request bodies are the `New*` / `*Patch` shapes from [`crate::models`];
//! unknown fields are rejected with 400. Updating or deleting a record that
//! does not exist answers 404.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use ratannam_core::{BannerId, CategoryId, ProductId, ReviewId};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::{
    AboutContent, AboutPatch, Banner, BannerPatch, CategoryContent, CategoryPatch, CmsSnapshot,
    ContactContent, ContactPatch, GoldRates, NewBanner, NewCategory, NewProduct, NewRates,
    NewReview, Product, ProductPatch, Review, ReviewPatch, TrendingPatch, TrendingProduct,
};
use crate::state::AppState;

/// A JSON body, with malformed input reported through [`AppError`].
type Body<T> = std::result::Result<Json<T>, JsonRejection>;

/// Every CMS record, including disabled ones.
///
/// GET /api/admin/content
#[instrument(skip(state))]
pub async fn content(State(state): State<AppState>) -> Json<CmsSnapshot> {
    Json(state.api().snapshot().await)
}

/// Turn a delete outcome into 204, or 404 when nothing was removed.
fn deleted(removed: bool, kind: &str, key: &str) -> Result<StatusCode> {
    if removed {
        add_breadcrumb("admin", &format!("Deleted {kind}"), Some(&[("id", key)]));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(kind, key))
    }
}

/// Turn an update outcome into 200, or 404 when no record matched.
fn updated<T>(record: Option<T>, kind: &str, key: &str) -> Result<Json<T>> {
    let record = record.ok_or_else(|| AppError::not_found(kind, key))?;
    add_breadcrumb("admin", &format!("Updated {kind}"), Some(&[("id", key)]));
    Ok(Json(record))
}

// =============================================================================
// Products
// =============================================================================

/// POST /api/admin/products
#[instrument(skip(state, body))]
pub async fn add_product(
    State(state): State<AppState>,
    body: Body<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(input) = body?;
    let product = state.api().add_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/admin/products/{id}
#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    body: Body<ProductPatch>,
) -> Result<Json<Product>> {
    let Json(patch) = body?;
    let product = state.api().update_product(&id, patch).await?;
    updated(product, "product", id.as_str())
}

/// DELETE /api/admin/products/{id}
#[instrument(skip(state), fields(id = %id))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    let removed = state.api().delete_product(&id).await?;
    deleted(removed, "product", id.as_str())
}

// =============================================================================
// Banners
// =============================================================================

/// POST /api/admin/banners
#[instrument(skip(state, body))]
pub async fn add_banner(
    State(state): State<AppState>,
    body: Body<NewBanner>,
) -> Result<(StatusCode, Json<Banner>)> {
    let Json(input) = body?;
    Ok((StatusCode::CREATED, Json(state.api().add_banner(input).await)))
}

/// PUT /api/admin/banners/{id}
#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<BannerId>,
    body: Body<BannerPatch>,
) -> Result<Json<Banner>> {
    let Json(patch) = body?;
    updated(state.api().update_banner(&id, patch).await, "banner", id.as_str())
}

/// DELETE /api/admin/banners/{id}
#[instrument(skip(state), fields(id = %id))]
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<BannerId>,
) -> Result<StatusCode> {
    deleted(state.api().delete_banner(&id).await, "banner", id.as_str())
}

// =============================================================================
// Categories
// =============================================================================

/// POST /api/admin/categories
#[instrument(skip(state, body))]
pub async fn add_category(
    State(state): State<AppState>,
    body: Body<NewCategory>,
) -> Result<(StatusCode, Json<CategoryContent>)> {
    let Json(input) = body?;
    Ok((StatusCode::CREATED, Json(state.api().add_category(input).await)))
}

/// PUT /api/admin/categories/{id}
#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    body: Body<CategoryPatch>,
) -> Result<Json<CategoryContent>> {
    let Json(patch) = body?;
    updated(
        state.api().update_category(&id, patch).await,
        "category",
        id.as_str(),
    )
}

/// DELETE /api/admin/categories/{id}
#[instrument(skip(state), fields(id = %id))]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<StatusCode> {
    deleted(state.api().delete_category(&id).await, "category", id.as_str())
}

// =============================================================================
// Reviews
// =============================================================================

/// POST /api/admin/reviews
#[instrument(skip(state, body))]
pub async fn add_review(
    State(state): State<AppState>,
    body: Body<NewReview>,
) -> Result<(StatusCode, Json<Review>)> {
    let Json(input) = body?;
    Ok((StatusCode::CREATED, Json(state.api().add_review(input).await)))
}

/// PUT /api/admin/reviews/{id}
#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<ReviewId>,
    body: Body<ReviewPatch>,
) -> Result<Json<Review>> {
    let Json(patch) = body?;
    updated(state.api().update_review(&id, patch).await, "review", id.as_str())
}

/// DELETE /api/admin/reviews/{id}
#[instrument(skip(state), fields(id = %id))]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<ReviewId>,
) -> Result<StatusCode> {
    deleted(state.api().delete_review(&id).await, "review", id.as_str())
}

// =============================================================================
// Trending
// =============================================================================

/// Mark a product as trending, re-enabling an existing link.
///
/// Answers 201 for a new link and 200 when an existing one is re-enabled.
/// The product is not required to exist; public listings skip links to
/// missing products.
///
/// POST /api/admin/trending/{product_id}
#[instrument(skip(state), fields(product_id = %product_id))]
pub async fn add_trending(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> (StatusCode, Json<TrendingProduct>) {
    let (link, created) = state.api().add_trending(product_id).await;
    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    (status, Json(link))
}

/// PUT /api/admin/trending/{product_id}
#[instrument(skip(state, body), fields(product_id = %product_id))]
pub async fn update_trending(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    body: Body<TrendingPatch>,
) -> Result<Json<TrendingProduct>> {
    let Json(patch) = body?;
    updated(
        state.api().update_trending(&product_id, patch).await,
        "trending link",
        product_id.as_str(),
    )
}

/// DELETE /api/admin/trending/{product_id}
#[instrument(skip(state), fields(product_id = %product_id))]
pub async fn remove_trending(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<StatusCode> {
    deleted(
        state.api().remove_trending(&product_id).await,
        "trending link",
        product_id.as_str(),
    )
}

// =============================================================================
// Singletons
// =============================================================================

/// Update the about section, creating it on first use.
///
/// PUT /api/admin/about
#[instrument(skip(state, body))]
pub async fn update_about(
    State(state): State<AppState>,
    body: Body<AboutPatch>,
) -> Result<Json<AboutContent>> {
    let Json(patch) = body?;
    Ok(Json(state.api().update_about(patch).await))
}

/// Update the contact details, creating them on first use.
///
/// PUT /api/admin/contact
#[instrument(skip(state, body))]
pub async fn update_contact(
    State(state): State<AppState>,
    body: Body<ContactPatch>,
) -> Result<Json<ContactContent>> {
    let Json(patch) = body?;
    Ok(Json(state.api().update_contact(patch).await))
}

/// Publish new metal rates.
///
/// PUT /api/admin/rates
#[instrument(skip(state, body))]
pub async fn update_rates(
    State(state): State<AppState>,
    body: Body<NewRates>,
) -> Result<Json<GoldRates>> {
    let Json(input) = body?;
    Ok(Json(state.api().update_rates(input.published_at(Utc::now())).await))
}
