//! CMS content models: banners, categories, trending links, the About and
//! Contact singletons, and customer reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ratannam_core::{AboutId, BannerId, CategoryId, ContactId, ProductId, ReviewId};

use super::{Patch, Record, enabled_by_default, merge};

// =============================================================================
// Banners
// =============================================================================

/// A hero banner on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    /// Call-to-action button label.
    pub cta_text: String,
    /// Call-to-action link target.
    pub cta_url: String,
    pub enabled: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a banner.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewBanner {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub cta_text: String,
    pub cta_url: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub display_order: i32,
}

/// Partial update for a banner.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BannerPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_text: Option<String>,
    pub cta_url: Option<String>,
    pub enabled: Option<bool>,
    pub display_order: Option<i32>,
}

impl NewBanner {
    pub(crate) fn into_banner(self, id: BannerId, now: DateTime<Utc>) -> Banner {
        Banner {
            id,
            title: self.title,
            subtitle: self.subtitle,
            image_url: self.image_url,
            cta_text: self.cta_text,
            cta_url: self.cta_url,
            enabled: self.enabled,
            display_order: self.display_order,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Banner {
    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }

    fn updated_at_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.updated_at
    }
}

impl Patch<Banner> for BannerPatch {
    fn apply_to(self, target: &mut Banner) {
        merge(&mut target.title, self.title);
        merge(&mut target.subtitle, self.subtitle);
        merge(&mut target.image_url, self.image_url);
        merge(&mut target.cta_text, self.cta_text);
        merge(&mut target.cta_url, self.cta_url);
        merge(&mut target.enabled, self.enabled);
        merge(&mut target.display_order, self.display_order);
    }
}

// =============================================================================
// Categories
// =============================================================================

/// A category tile on the home page.
///
/// Independent of the catalog's [`ratannam_core::Category`] enumeration: this
/// is marketing content ("Bridal Sets"), not a product classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryContent {
    pub id: CategoryId,
    pub name: String,
    pub image_url: String,
    pub enabled: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a category tile.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCategory {
    pub name: String,
    pub image_url: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub display_order: i32,
}

/// Partial update for a category tile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub enabled: Option<bool>,
    pub display_order: Option<i32>,
}

impl NewCategory {
    pub(crate) fn into_category(self, id: CategoryId, now: DateTime<Utc>) -> CategoryContent {
        CategoryContent {
            id,
            name: self.name,
            image_url: self.image_url,
            enabled: self.enabled,
            display_order: self.display_order,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for CategoryContent {
    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }

    fn updated_at_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.updated_at
    }
}

impl Patch<CategoryContent> for CategoryPatch {
    fn apply_to(self, target: &mut CategoryContent) {
        merge(&mut target.name, self.name);
        merge(&mut target.image_url, self.image_url);
        merge(&mut target.enabled, self.enabled);
        merge(&mut target.display_order, self.display_order);
    }
}

// =============================================================================
// Trending products
// =============================================================================

/// A link promoting a catalog product to the trending section.
///
/// Keyed by product ID; there is at most one link per product. The product
/// itself lives in the catalog and may have been deleted since, in which
/// case the link is dangling and consumers skip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingProduct {
    pub product_id: ProductId,
    pub display_order: i32,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a trending link.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrendingPatch {
    pub display_order: Option<i32>,
    pub enabled: Option<bool>,
}

impl Record for TrendingProduct {
    fn key(&self) -> &str {
        self.product_id.as_str()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }

    fn updated_at_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.updated_at
    }
}

impl Patch<TrendingProduct> for TrendingPatch {
    fn apply_to(self, target: &mut TrendingProduct) {
        merge(&mut target.display_order, self.display_order);
        merge(&mut target.enabled, self.enabled);
    }
}

// =============================================================================
// About
// =============================================================================

/// The "Our Story" section. At most one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub id: AboutId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub bullet_points: Vec<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for the About section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Replaces the whole list when present.
    pub bullet_points: Option<Vec<String>>,
    pub enabled: Option<bool>,
}

impl AboutContent {
    pub(crate) const DEFAULT_ID: &'static str = "about-1";

    /// The record created when the About section is first edited.
    pub(crate) fn blank(now: DateTime<Utc>) -> Self {
        Self {
            id: AboutId::new(Self::DEFAULT_ID),
            title: "About Us".to_string(),
            description: String::new(),
            image_url: String::new(),
            bullet_points: Vec::new(),
            enabled: true,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for AboutContent {
    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn updated_at_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.updated_at
    }
}

impl Patch<AboutContent> for AboutPatch {
    fn apply_to(self, target: &mut AboutContent) {
        merge(&mut target.title, self.title);
        merge(&mut target.description, self.description);
        merge(&mut target.image_url, self.image_url);
        merge(&mut target.bullet_points, self.bullet_points);
        merge(&mut target.enabled, self.enabled);
    }
}

// =============================================================================
// Contact
// =============================================================================

/// Store contact details. At most one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    pub id: ContactId,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub working_hours: String,
    pub map_embed_url: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for the contact details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactPatch {
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub working_hours: Option<String>,
    pub map_embed_url: Option<String>,
    pub enabled: Option<bool>,
}

impl ContactContent {
    pub(crate) const DEFAULT_ID: &'static str = "contact-1";

    /// The record created when the contact details are first edited.
    pub(crate) fn blank(now: DateTime<Utc>) -> Self {
        Self {
            id: ContactId::new(Self::DEFAULT_ID),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            whatsapp: String::new(),
            working_hours: String::new(),
            map_embed_url: String::new(),
            enabled: true,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for ContactContent {
    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn updated_at_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.updated_at
    }
}

impl Patch<ContactContent> for ContactPatch {
    fn apply_to(self, target: &mut ContactContent) {
        merge(&mut target.address, self.address);
        merge(&mut target.email, self.email);
        merge(&mut target.phone, self.phone);
        merge(&mut target.whatsapp, self.whatsapp);
        merge(&mut target.working_hours, self.working_hours);
        merge(&mut target.map_embed_url, self.map_embed_url);
        merge(&mut target.enabled, self.enabled);
    }
}

// =============================================================================
// Reviews
// =============================================================================

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub name: String,
    pub comment: String,
    /// Star rating, nominally 1-5. Not range-checked.
    pub rating: u8,
    /// Free-text label such as "Loyal Customer".
    pub customer_type: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a review.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewReview {
    pub name: String,
    pub comment: String,
    pub rating: u8,
    pub customer_type: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

/// Partial update for a review.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewPatch {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<u8>,
    pub customer_type: Option<String>,
    pub enabled: Option<bool>,
}

impl NewReview {
    pub(crate) fn into_review(self, id: ReviewId, now: DateTime<Utc>) -> Review {
        Review {
            id,
            name: self.name,
            comment: self.comment,
            rating: self.rating,
            customer_type: self.customer_type,
            enabled: self.enabled,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Review {
    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn updated_at_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.updated_at
    }
}

impl Patch<Review> for ReviewPatch {
    fn apply_to(self, target: &mut Review) {
        merge(&mut target.name, self.name);
        merge(&mut target.comment, self.comment);
        merge(&mut target.rating, self.rating);
        merge(&mut target.customer_type, self.customer_type);
        merge(&mut target.enabled, self.enabled);
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Everything the content store holds, including disabled records.
///
/// Used by the admin panel, which needs to see hidden content to edit it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmsSnapshot {
    pub banners: Vec<Banner>,
    pub categories: Vec<CategoryContent>,
    pub trending_products: Vec<TrendingProduct>,
    pub about_content: Option<AboutContent>,
    pub contact_content: Option<ContactContent>,
    pub reviews: Vec<Review>,
}
