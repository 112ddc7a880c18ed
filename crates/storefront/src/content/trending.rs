//! Trending product links.
//!
//! Links are keyed by product ID rather than an ID of their own, and a
//! product is linked at most once: adding an already-linked product
//! re-enables the existing link instead of creating a second one.

use chrono::Utc;

use ratannam_core::ProductId;

use super::{ContentStore, remove_record, update_record, visible};
use crate::models::{Record, TrendingPatch, TrendingProduct};

impl ContentStore {
    /// Enabled trending links in display order.
    #[must_use]
    pub fn trending_products(&self) -> Vec<TrendingProduct> {
        visible(&self.trending)
    }

    /// Promote a product to trending.
    ///
    /// If the product already has a link it is re-enabled and returned;
    /// otherwise a new link is appended with a display order one past the
    /// current number of links. The flag is `true` when the link is new.
    pub fn add_trending(&mut self, product_id: ProductId) -> (TrendingProduct, bool) {
        let now = Utc::now();

        if let Some(existing) = self.trending.iter_mut().find(|t| t.product_id == product_id) {
            existing.enabled = true;
            existing.touch(now);
            tracing::info!(product_id = %product_id, "Trending link re-enabled");
            return (existing.clone(), false);
        }

        let display_order = i32::try_from(self.trending.len())
            .unwrap_or(i32::MAX)
            .saturating_add(1);
        let link = TrendingProduct {
            product_id,
            display_order,
            enabled: true,
            created_at: now,
            updated_at: now,
        };

        tracing::info!(product_id = %link.product_id, display_order, "Trending link added");
        self.trending.push(link.clone());
        (link, true)
    }

    /// Merge `patch` onto the link for `product_id`. `None` if the product
    /// is not linked.
    pub fn update_trending(
        &mut self,
        product_id: &ProductId,
        patch: TrendingPatch,
    ) -> Option<TrendingProduct> {
        let updated = update_record(&mut self.trending, product_id.as_str(), patch);
        if updated.is_some() {
            tracing::info!(product_id = %product_id, "Trending link updated");
        }
        updated
    }

    /// Remove the link for `product_id`. `false` if the product is not linked.
    pub fn remove_trending(&mut self, product_id: &ProductId) -> bool {
        let removed = remove_record(&mut self.trending, product_id.as_str());
        if removed {
            tracing::info!(product_id = %product_id, "Trending link removed");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trending_twice_keeps_one_link() {
        let mut store = ContentStore::default();
        let id = ProductId::new("7");

        let (first, created) = store.add_trending(id.clone());
        assert!(created);
        let (second, created) = store.add_trending(id.clone());
        assert!(!created);

        let links: Vec<_> = store
            .snapshot()
            .trending_products
            .into_iter()
            .filter(|t| t.product_id == id)
            .collect();
        assert_eq!(links.len(), 1);
        assert!(links.iter().all(|t| t.enabled));
        assert_eq!(first.created_at, second.created_at);
        assert_eq!(first.display_order, second.display_order);
    }

    #[test]
    fn test_add_trending_re_enables_disabled_link() {
        let mut store = ContentStore::seeded();
        let id = ProductId::new("2");
        store.update_trending(
            &id,
            TrendingPatch {
                enabled: Some(false),
                ..TrendingPatch::default()
            },
        );
        assert!(store.trending_products().iter().all(|t| t.product_id != id));

        let (link, created) = store.add_trending(id.clone());
        assert!(link.enabled);
        assert!(!created);
        assert!(store.trending_products().iter().any(|t| t.product_id == id));
    }

    #[test]
    fn test_new_link_goes_after_existing_links() {
        let mut store = ContentStore::seeded();
        let (link, created) = store.add_trending(ProductId::new("6"));
        assert!(created);
        assert_eq!(link.display_order, 5);
        assert_eq!(
            store.trending_products().last().map(|t| t.product_id.clone()),
            Some(ProductId::new("6"))
        );
    }

    #[test]
    fn test_remove_trending_by_product_id() {
        let mut store = ContentStore::seeded();
        let id = ProductId::new("3");

        assert!(store.remove_trending(&id));
        assert!(!store.remove_trending(&id));
        assert!(store.snapshot().trending_products.iter().all(|t| t.product_id != id));
    }

    #[test]
    fn test_update_missing_trending_is_none() {
        let mut store = ContentStore::seeded();
        assert!(
            store
                .update_trending(&ProductId::new("99"), TrendingPatch::default())
                .is_none()
        );
    }
}
