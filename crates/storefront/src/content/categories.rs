//! Category tile management.

use chrono::Utc;

use ratannam_core::CategoryId;

use super::{ContentStore, find_record, remove_record, update_record, visible};
use crate::models::{CategoryContent, CategoryPatch, NewCategory};

impl ContentStore {
    /// Enabled category tiles in display order.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryContent> {
        visible(&self.categories)
    }

    /// Look up a category tile by ID, enabled or not.
    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<CategoryContent> {
        find_record(&self.categories, id.as_str()).cloned()
    }

    /// Create a category tile with a fresh ID.
    pub fn add_category(&mut self, input: NewCategory) -> CategoryContent {
        let existing = &self.categories;
        let id = self
            .ids
            .categories
            .next_id(|candidate| existing.iter().any(|c| c.id.as_str() == candidate));
        let category = input.into_category(CategoryId::new(id), Utc::now());

        tracing::info!(id = %category.id, name = %category.name, "Category added");
        self.categories.push(category.clone());
        category
    }

    /// Merge `patch` onto a category tile. `None` if no tile has this ID.
    pub fn update_category(
        &mut self,
        id: &CategoryId,
        patch: CategoryPatch,
    ) -> Option<CategoryContent> {
        let updated = update_record(&mut self.categories, id.as_str(), patch);
        if updated.is_some() {
            tracing::info!(id = %id, "Category updated");
        }
        updated
    }

    /// Delete a category tile. `false` if no tile has this ID.
    pub fn delete_category(&mut self, id: &CategoryId) -> bool {
        let removed = remove_record(&mut self.categories, id.as_str());
        if removed {
            tracing::info!(id = %id, "Category deleted");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_merges_and_refreshes_timestamp() {
        let mut store = ContentStore::seeded();
        let before = store.category(&"cat-2".into()).expect("seeded category");

        let after = store
            .update_category(
                &before.id,
                CategoryPatch {
                    display_order: Some(10),
                    ..CategoryPatch::default()
                },
            )
            .expect("category exists");

        assert_eq!(after.display_order, 10);
        assert_eq!(after.name, before.name);
        assert_eq!(after.image_url, before.image_url);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[test]
    fn test_disabled_category_is_hidden_but_still_addressable() {
        let mut store = ContentStore::seeded();
        let id = CategoryId::new("cat-1");
        store.update_category(
            &id,
            CategoryPatch {
                enabled: Some(false),
                ..CategoryPatch::default()
            },
        );

        assert!(store.categories().iter().all(|c| c.id != id));
        assert!(store.category(&id).is_some());
    }

    #[test]
    fn test_reordered_categories_follow_display_order() {
        let mut store = ContentStore::seeded();
        store.update_category(
            &"cat-1".into(),
            CategoryPatch {
                display_order: Some(5),
                ..CategoryPatch::default()
            },
        );

        let names: Vec<_> = store.categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Silver Artifacts", "Bridal Sets", "Gold Jewellery"]);
    }
}
