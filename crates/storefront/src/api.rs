//! Asynchronous access to the content, catalog, and rates stores.
//!
//! Every call waits for a configured latency window before touching a store,
//! so callers always treat content access as a remote call. Once the window
//! has passed, the store lock is taken once and the operation runs to
//! completion with no await point while the lock is held: no caller ever
//! sees another call's half-applied change, and concurrent writers resolve
//! as last-write-wins.

use std::time::Duration;

use ratannam_core::{BannerId, Category, CategoryId, ProductId, ReviewId};
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, CatalogStore};
use crate::config::LatencyConfig;
use crate::content::ContentStore;
use crate::models::{
    AboutContent, AboutPatch, Banner, BannerPatch, CategoryContent, CategoryPatch, CmsSnapshot,
    ContactContent, ContactPatch, GoldRates, NewBanner, NewCategory, NewProduct, NewReview,
    Product, ProductPatch, Review, ReviewPatch, TrendingPatch, TrendingProduct,
};
use crate::rates::RatesStore;

/// The storefront's single entry point to its data.
#[derive(Debug)]
pub struct CmsApi {
    content: RwLock<ContentStore>,
    catalog: RwLock<CatalogStore>,
    rates: RwLock<RatesStore>,
    latency: LatencyConfig,
}

impl CmsApi {
    #[must_use]
    pub fn new(content: ContentStore, catalog: CatalogStore, latency: LatencyConfig) -> Self {
        Self {
            content: RwLock::new(content),
            catalog: RwLock::new(catalog),
            rates: RwLock::new(RatesStore::default()),
            latency,
        }
    }

    /// Launch content, the in-memory sample catalog, and initial rates.
    #[must_use]
    pub fn seeded(latency: LatencyConfig) -> Self {
        Self::new(ContentStore::seeded(), CatalogStore::in_memory(), latency)
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    // Catalog writes are write-through: the backend save runs synchronously
    // on the calling worker while the write lock is held, so the call only
    // returns once the change is stored. Fine for a catalog-sized JSON file.

    pub async fn products(&self) -> Vec<Product> {
        wait(self.latency.catalog).await;
        self.catalog.read().await.products()
    }

    pub async fn product(&self, id: &ProductId) -> Option<Product> {
        wait(self.latency.catalog_read).await;
        self.catalog.read().await.product(id)
    }

    pub async fn featured_products(&self) -> Vec<Product> {
        wait(self.latency.catalog).await;
        self.catalog.read().await.featured()
    }

    pub async fn products_in(&self, category: Category) -> Vec<Product> {
        wait(self.latency.catalog).await;
        self.catalog.read().await.by_category(category)
    }

    /// # Errors
    ///
    /// Returns an error if the catalog backend cannot be written.
    pub async fn add_product(&self, input: NewProduct) -> Result<Product, CatalogError> {
        wait(self.latency.catalog).await;
        self.catalog.write().await.add_product(input)
    }

    /// # Errors
    ///
    /// Returns an error if the catalog backend cannot be written.
    pub async fn update_product(
        &self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, CatalogError> {
        wait(self.latency.catalog).await;
        self.catalog.write().await.update_product(id, patch)
    }

    /// # Errors
    ///
    /// Returns an error if the catalog backend cannot be written.
    pub async fn delete_product(&self, id: &ProductId) -> Result<bool, CatalogError> {
        wait(self.latency.catalog).await;
        self.catalog.write().await.delete_product(id)
    }

    // =========================================================================
    // Banners
    // =========================================================================

    pub async fn banners(&self) -> Vec<Banner> {
        wait(self.latency.content).await;
        self.content.read().await.banners()
    }

    pub async fn add_banner(&self, input: NewBanner) -> Banner {
        wait(self.latency.content).await;
        self.content.write().await.add_banner(input)
    }

    pub async fn update_banner(&self, id: &BannerId, patch: BannerPatch) -> Option<Banner> {
        wait(self.latency.content).await;
        self.content.write().await.update_banner(id, patch)
    }

    pub async fn delete_banner(&self, id: &BannerId) -> bool {
        wait(self.latency.content).await;
        self.content.write().await.delete_banner(id)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub async fn categories(&self) -> Vec<CategoryContent> {
        wait(self.latency.content).await;
        self.content.read().await.categories()
    }

    pub async fn add_category(&self, input: NewCategory) -> CategoryContent {
        wait(self.latency.content).await;
        self.content.write().await.add_category(input)
    }

    pub async fn update_category(
        &self,
        id: &CategoryId,
        patch: CategoryPatch,
    ) -> Option<CategoryContent> {
        wait(self.latency.content).await;
        self.content.write().await.update_category(id, patch)
    }

    pub async fn delete_category(&self, id: &CategoryId) -> bool {
        wait(self.latency.content).await;
        self.content.write().await.delete_category(id)
    }

    // =========================================================================
    // Trending
    // =========================================================================

    pub async fn trending_products(&self) -> Vec<TrendingProduct> {
        wait(self.latency.content).await;
        self.content.read().await.trending_products()
    }

    /// Promote a product to trending; the flag is `true` when the link is new.
    pub async fn add_trending(&self, product_id: ProductId) -> (TrendingProduct, bool) {
        wait(self.latency.content).await;
        self.content.write().await.add_trending(product_id)
    }

    pub async fn update_trending(
        &self,
        product_id: &ProductId,
        patch: TrendingPatch,
    ) -> Option<TrendingProduct> {
        wait(self.latency.content).await;
        self.content.write().await.update_trending(product_id, patch)
    }

    pub async fn remove_trending(&self, product_id: &ProductId) -> bool {
        wait(self.latency.content).await;
        self.content.write().await.remove_trending(product_id)
    }

    /// Visible trending picks resolved to their products, in trending order.
    ///
    /// Links whose product no longer exists are skipped.
    pub async fn trending_catalog(&self) -> Vec<Product> {
        let links = self.trending_products().await;
        let products = self.products().await;

        let resolved: Vec<Product> = links
            .iter()
            .filter_map(|link| products.iter().find(|p| p.id == link.product_id).cloned())
            .collect();

        if resolved.len() < links.len() {
            tracing::debug!(
                dangling = links.len() - resolved.len(),
                "Skipped trending links to missing products"
            );
        }
        resolved
    }

    // =========================================================================
    // About / Contact
    // =========================================================================

    pub async fn about(&self) -> Option<AboutContent> {
        wait(self.latency.content).await;
        self.content.read().await.about()
    }

    pub async fn update_about(&self, patch: AboutPatch) -> AboutContent {
        wait(self.latency.content).await;
        self.content.write().await.update_about(patch)
    }

    pub async fn contact(&self) -> Option<ContactContent> {
        wait(self.latency.content).await;
        self.content.read().await.contact()
    }

    pub async fn update_contact(&self, patch: ContactPatch) -> ContactContent {
        wait(self.latency.content).await;
        self.content.write().await.update_contact(patch)
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    pub async fn reviews(&self) -> Vec<Review> {
        wait(self.latency.content).await;
        self.content.read().await.reviews()
    }

    pub async fn add_review(&self, input: NewReview) -> Review {
        wait(self.latency.content).await;
        self.content.write().await.add_review(input)
    }

    pub async fn update_review(&self, id: &ReviewId, patch: ReviewPatch) -> Option<Review> {
        wait(self.latency.content).await;
        self.content.write().await.update_review(id, patch)
    }

    pub async fn delete_review(&self, id: &ReviewId) -> bool {
        wait(self.latency.content).await;
        self.content.write().await.delete_review(id)
    }

    // =========================================================================
    // Rates
    // =========================================================================

    pub async fn rates(&self) -> GoldRates {
        wait(self.latency.content).await;
        self.rates.read().await.get()
    }

    pub async fn update_rates(&self, rates: GoldRates) -> GoldRates {
        wait(self.latency.content).await;
        self.rates.write().await.update(rates)
    }

    // =========================================================================
    // Admin
    // =========================================================================

    /// Every CMS record, disabled ones included.
    pub async fn snapshot(&self) -> CmsSnapshot {
        wait(self.latency.content).await;
        self.content.read().await.snapshot()
    }
}

async fn wait(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
