//! Domain models for storefront.
//!
//! Every managed entity comes with three shapes:
//!
//! - the record itself (`Banner`, `Product`, ...), as stored and returned
//! - a `New*` input with everything except the ID and timestamps
//! - a `*Patch` with one optional field per editable attribute
//!
//! Patches and inputs deny unknown fields, so a typo in an admin payload is
//! rejected at the JSON boundary instead of being silently dropped.

pub mod content;
pub mod product;
pub mod rates;

use chrono::{DateTime, Utc};

pub use content::{
    AboutContent, AboutPatch, Banner, BannerPatch, CategoryContent, CategoryPatch, CmsSnapshot,
    ContactContent, ContactPatch, NewBanner, NewCategory, NewReview, Review, ReviewPatch,
    TrendingPatch, TrendingProduct,
};
pub use product::{NewProduct, Product, ProductPatch};
pub use rates::{GoldRates, NewRates};

/// A CMS-managed record with a visibility flag and a lookup key.
pub trait Record: Clone {
    /// The key update and delete operations match on.
    fn key(&self) -> &str;

    /// Whether the record is visible on public pages.
    fn is_enabled(&self) -> bool;

    /// Sort position on public pages, if the record kind has one.
    fn display_order(&self) -> Option<i32> {
        None
    }

    /// Mutable access to the last-modified timestamp.
    fn updated_at_mut(&mut self) -> &mut DateTime<Utc>;

    /// Refresh the last-modified timestamp.
    ///
    /// Never moves the timestamp backwards, even if the wall clock does.
    fn touch(&mut self, now: DateTime<Utc>) {
        let updated_at = self.updated_at_mut();
        *updated_at = now.max(*updated_at);
    }
}

/// A partial update that can be merged onto a record of type `T`.
///
/// Fields left as `None` keep their current value.
pub trait Patch<T> {
    fn apply_to(self, target: &mut T);
}

/// Overwrite `slot` when the patch carries a value for it.
pub(crate) fn merge<V>(slot: &mut V, value: Option<V>) {
    if let Some(value) = value {
        *slot = value;
    }
}

pub(crate) const fn enabled_by_default() -> bool {
    true
}
