//! Hero banner management.

use chrono::Utc;

use ratannam_core::BannerId;

use super::{ContentStore, find_record, remove_record, update_record, visible};
use crate::models::{Banner, BannerPatch, NewBanner};

impl ContentStore {
    /// Enabled banners in display order.
    #[must_use]
    pub fn banners(&self) -> Vec<Banner> {
        visible(&self.banners)
    }

    /// Look up a banner by ID, enabled or not.
    #[must_use]
    pub fn banner(&self, id: &BannerId) -> Option<Banner> {
        find_record(&self.banners, id.as_str()).cloned()
    }

    /// Create a banner with a fresh ID.
    pub fn add_banner(&mut self, input: NewBanner) -> Banner {
        let existing = &self.banners;
        let id = self
            .ids
            .banners
            .next_id(|candidate| existing.iter().any(|b| b.id.as_str() == candidate));
        let banner = input.into_banner(BannerId::new(id), Utc::now());

        tracing::info!(id = %banner.id, title = %banner.title, "Banner added");
        self.banners.push(banner.clone());
        banner
    }

    /// Merge `patch` onto a banner. `None` if no banner has this ID.
    pub fn update_banner(&mut self, id: &BannerId, patch: BannerPatch) -> Option<Banner> {
        let updated = update_record(&mut self.banners, id.as_str(), patch);
        if updated.is_some() {
            tracing::info!(id = %id, "Banner updated");
        }
        updated
    }

    /// Delete a banner. `false` if no banner has this ID.
    pub fn delete_banner(&mut self, id: &BannerId) -> bool {
        let removed = remove_record(&mut self.banners, id.as_str());
        if removed {
            tracing::info!(id = %id, "Banner deleted");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_banner_is_hidden_but_still_addressable() {
        let mut store = ContentStore::seeded();
        let id = BannerId::new("banner-1");
        store.update_banner(
            &id,
            BannerPatch {
                enabled: Some(false),
                ..BannerPatch::default()
            },
        );

        assert!(store.banners().is_empty());
        let hidden = store.banner(&id).expect("disabled banner is still stored");
        assert!(!hidden.enabled);
        assert!(store.banner(&BannerId::new("banner-404")).is_none());
    }

    #[test]
    fn test_new_banner_is_addressable_by_its_id() {
        let mut store = ContentStore::default();
        let banner = store.add_banner(NewBanner {
            title: "Diwali Collection".to_string(),
            subtitle: String::new(),
            image_url: String::new(),
            cta_text: "Explore".to_string(),
            cta_url: "/products".to_string(),
            enabled: true,
            display_order: 0,
        });

        assert_eq!(store.banner(&banner.id), Some(banner));
    }
}
