//! Public read endpoints.
//!
//! Everything here returns enabled records only. Hidden or missing
//! singletons serialize as `null` rather than an error.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use ratannam_core::{Category, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::{AboutContent, Banner, CategoryContent, ContactContent, GoldRates, Product, Review};
use crate::state::AppState;

/// Catalog filters.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    /// Only featured products.
    #[serde(default)]
    pub featured: bool,
    /// Category name, case-insensitive.
    pub category: Option<String>,
}

/// List catalog products.
///
/// A malformed query string (`featured=yes`) is a JSON 400 like any other
/// bad filter.
///
/// GET /api/products
#[instrument(skip(state, query))]
pub async fn products(
    State(state): State<AppState>,
    query: std::result::Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>> {
    let Query(query) = query?;
    let category = query
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let api = state.api();
    let products = match (query.featured, category) {
        (false, None) => api.products().await,
        (true, None) => api.featured_products().await,
        (featured, Some(category)) => {
            let mut products = api.products_in(category).await;
            if featured {
                products.retain(|p| p.featured);
            }
            products
        }
    };

    Ok(Json(products))
}

/// Show one product.
///
/// GET /api/products/{id}
#[instrument(skip(state), fields(id = %id))]
pub async fn product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .api()
        .product(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found("product", &id))
}

/// GET /api/banners
#[instrument(skip(state))]
pub async fn banners(State(state): State<AppState>) -> Json<Vec<Banner>> {
    Json(state.api().banners().await)
}

/// GET /api/categories
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<CategoryContent>> {
    Json(state.api().categories().await)
}

/// Trending products in trending order, with stale links dropped.
///
/// GET /api/trending
#[instrument(skip(state))]
pub async fn trending(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.api().trending_catalog().await)
}

/// GET /api/about
#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> Json<Option<AboutContent>> {
    Json(state.api().about().await)
}

/// GET /api/contact
#[instrument(skip(state))]
pub async fn contact(State(state): State<AppState>) -> Json<Option<ContactContent>> {
    Json(state.api().contact().await)
}

/// GET /api/reviews
#[instrument(skip(state))]
pub async fn reviews(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.api().reviews().await)
}

/// GET /api/rates
#[instrument(skip(state))]
pub async fn rates(State(state): State<AppState>) -> Json<GoldRates> {
    Json(state.api().rates().await)
}
