//! Content management for the CMS-driven sections of the storefront.
//!
//! [`ContentStore`] owns every piece of editable marketing content as one
//! aggregate: banners, category tiles, trending links, the About and Contact
//! singletons, and reviews. Products are not here; they belong to the
//! [`CatalogStore`](crate::catalog::CatalogStore).
//!
//! # Visibility and ordering
//!
//! Public reads only ever return enabled records. Kinds with a display order
//! are sorted ascending by it; the sort is stable, so records sharing an
//! order keep their insertion order.
//!
//! # Not found
//!
//! Reads never fail. Updates return `None` and deletes return `false` when
//! nothing matched, and leave the store untouched.

mod banners;
mod categories;
mod reviews;
mod seed;
mod singletons;
mod trending;

use chrono::Utc;

use ratannam_core::IdGenerator;

use crate::models::{
    AboutContent, Banner, CategoryContent, CmsSnapshot, ContactContent, Patch, Record, Review,
    TrendingProduct,
};

/// In-memory store for all CMS content.
///
/// Construct one at startup and hand it to the [`CmsApi`](crate::api::CmsApi);
/// there is no global instance.
#[derive(Debug, Clone)]
pub struct ContentStore {
    banners: Vec<Banner>,
    categories: Vec<CategoryContent>,
    trending: Vec<TrendingProduct>,
    about: Option<AboutContent>,
    contact: Option<ContactContent>,
    reviews: Vec<Review>,
    ids: ContentIds,
}

/// One ID generator per entity kind, so IDs never collide across kinds.
#[derive(Debug, Clone)]
struct ContentIds {
    banners: IdGenerator,
    categories: IdGenerator,
    reviews: IdGenerator,
}

impl Default for ContentIds {
    fn default() -> Self {
        Self {
            banners: IdGenerator::new("banner"),
            categories: IdGenerator::new("cat"),
            reviews: IdGenerator::new("review"),
        }
    }
}

impl Default for ContentStore {
    /// An empty store: no records and no singletons.
    fn default() -> Self {
        Self {
            banners: Vec::new(),
            categories: Vec::new(),
            trending: Vec::new(),
            about: None,
            contact: None,
            reviews: Vec::new(),
            ids: ContentIds::default(),
        }
    }
}

impl ContentStore {
    /// A store holding the shop's launch content.
    #[must_use]
    pub fn seeded() -> Self {
        let store = seed::launch_content(Utc::now());
        tracing::info!(
            banners = store.banners.len(),
            categories = store.categories.len(),
            trending = store.trending.len(),
            reviews = store.reviews.len(),
            "Content store seeded"
        );
        store
    }

    /// Everything in the store, including disabled records.
    #[must_use]
    pub fn snapshot(&self) -> CmsSnapshot {
        CmsSnapshot {
            banners: self.banners.clone(),
            categories: self.categories.clone(),
            trending_products: self.trending.clone(),
            about_content: self.about.clone(),
            contact_content: self.contact.clone(),
            reviews: self.reviews.clone(),
        }
    }
}

// =============================================================================
// Shared collection helpers
// =============================================================================

/// Enabled records, stably sorted by display order.
fn visible<T: Record>(records: &[T]) -> Vec<T> {
    let mut out: Vec<T> = records.iter().filter(|r| r.is_enabled()).cloned().collect();
    out.sort_by_key(|r| r.display_order());
    out
}

/// Merge `patch` onto the record matching `key` and refresh its timestamp.
fn update_record<T, P>(records: &mut [T], key: &str, patch: P) -> Option<T>
where
    T: Record,
    P: Patch<T>,
{
    let record = records.iter_mut().find(|r| r.key() == key)?;
    patch.apply_to(record);
    record.touch(Utc::now());
    Some(record.clone())
}

/// Remove every record matching `key`; reports whether anything was removed.
fn remove_record<T: Record>(records: &mut Vec<T>, key: &str) -> bool {
    let before = records.len();
    records.retain(|r| r.key() != key);
    records.len() != before
}

fn find_record<'a, T: Record>(records: &'a [T], key: &str) -> Option<&'a T> {
    records.iter().find(|r| r.key() == key)
}
