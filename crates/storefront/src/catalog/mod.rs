//! Product catalog storage.
//!
//! [`CatalogStore`] owns the product list. It keeps the list in memory and
//! writes every change through to a [`CatalogBackend`]. The first time a
//! backend is opened with nothing stored, the sample products are written
//! to it; a stored empty list is left alone.

mod backend;
pub(crate) mod seed;

use std::path::PathBuf;

use ratannam_core::{Category, IdGenerator, ProductId};
use thiserror::Error;

pub use backend::{CatalogBackend, JsonFileBackend, MemoryBackend};

use crate::models::{NewProduct, Patch, Product, ProductPatch};

/// Errors from the catalog's storage backend.
///
/// Looking up, updating, or deleting a product that does not exist is not
/// an error; those operations return `None` / `false` instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The product catalog.
#[derive(Debug)]
pub struct CatalogStore {
    backend: Box<dyn CatalogBackend>,
    products: Vec<Product>,
    ids: IdGenerator,
}

impl CatalogStore {
    /// Open the catalog on `backend`, seeding it if nothing is stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read, or cannot be written
    /// while seeding.
    pub fn open(mut backend: Box<dyn CatalogBackend>) -> Result<Self, CatalogError> {
        let products = if let Some(products) = backend.load()? {
            tracing::info!(count = products.len(), "Catalog loaded");
            products
        } else {
            let products = seed::sample_products();
            backend.save(&products)?;
            tracing::info!(count = products.len(), "Catalog seeded with sample products");
            products
        };

        Ok(Self {
            backend,
            products,
            ids: IdGenerator::numeric(),
        })
    }

    /// Open a volatile catalog seeded with the sample products.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryBackend::with_products(seed::sample_products())),
            products: seed::sample_products(),
            ids: IdGenerator::numeric(),
        }
    }

    /// Every product, in catalog order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.products.iter().find(|p| &p.id == id).cloned()
    }

    /// Products flagged as featured, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<Product> {
        self.products.iter().filter(|p| p.featured).cloned().collect()
    }

    /// Products in `category`, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Add a product with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails; the catalog is unchanged.
    pub fn add_product(&mut self, input: NewProduct) -> Result<Product, CatalogError> {
        let existing = &self.products;
        let id = self
            .ids
            .next_id(|candidate| existing.iter().any(|p| p.id.as_str() == candidate));
        let product = input.into_product(ProductId::new(id));

        let mut next = self.products.clone();
        next.push(product.clone());
        self.commit(next)?;

        tracing::info!(id = %product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Merge `patch` onto a product. `Ok(None)` if no product has this ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails; the catalog is unchanged.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, CatalogError> {
        let Some(index) = self.products.iter().position(|p| &p.id == id) else {
            return Ok(None);
        };

        let mut next = self.products.clone();
        let Some(product) = next.get_mut(index) else {
            return Ok(None);
        };
        patch.apply_to(product);
        let updated = product.clone();
        self.commit(next)?;

        tracing::info!(id = %id, "Product updated");
        Ok(Some(updated))
    }

    /// Delete a product. `Ok(false)` if no product has this ID.
    ///
    /// Trending links pointing at the product are left in place; readers
    /// skip them.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails; the catalog is unchanged.
    pub fn delete_product(&mut self, id: &ProductId) -> Result<bool, CatalogError> {
        let next: Vec<Product> = self.products.iter().filter(|p| &p.id != id).cloned().collect();
        if next.len() == self.products.len() {
            return Ok(false);
        }
        self.commit(next)?;

        tracing::info!(id = %id, "Product deleted");
        Ok(true)
    }

    /// Persist `next`, and only then make it the live list.
    fn commit(&mut self, next: Vec<Product>) -> Result<(), CatalogError> {
        self.backend.save(&next)?;
        self.products = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ratannam_core::{Discount, Price};

    use super::*;

    fn earrings() -> NewProduct {
        NewProduct {
            name: "Kundan Earrings".to_string(),
            description: "Handcrafted kundan earrings".to_string(),
            price: Price::from_units(4_500),
            category: Category::Artificial,
            image: String::new(),
            featured: false,
            in_stock: true,
            discount: Discount::NONE,
        }
    }

    #[test]
    fn test_absent_catalog_is_seeded() {
        let store = CatalogStore::open(Box::new(MemoryBackend::default())).expect("open");
        assert_eq!(store.products().len(), 8);
        assert_eq!(
            store.product(&ProductId::new("1")).map(|p| p.name),
            Some("Gold Necklace".to_string())
        );
    }

    #[test]
    fn test_empty_catalog_is_not_reseeded() {
        let store =
            CatalogStore::open(Box::new(MemoryBackend::with_products(Vec::new()))).expect("open");
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_add_assigns_unused_id() {
        let mut store = CatalogStore::in_memory();
        let product = store.add_product(earrings()).expect("add");

        assert_eq!(product.id.as_str(), "9");
        assert_eq!(store.product(&product.id), Some(product));
    }

    #[test]
    fn test_add_after_delete_does_not_reuse_ids() {
        let mut store = CatalogStore::in_memory();
        let first = store.add_product(earrings()).expect("add");
        assert!(store.delete_product(&first.id).expect("delete"));

        let second = store.add_product(earrings()).expect("add");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_update_merges_fields() {
        let mut store = CatalogStore::in_memory();
        let id = ProductId::new("3");

        let updated = store
            .update_product(
                &id,
                ProductPatch {
                    in_stock: Some(true),
                    discount: Some(Discount::percent_off(20)),
                    ..ProductPatch::default()
                },
            )
            .expect("update")
            .expect("product exists");

        assert!(updated.in_stock);
        assert_eq!(updated.name, "Diamond Ring");
        assert_eq!(updated.effective_price(), Price::from_units(96_000));
    }

    #[test]
    fn test_update_and_delete_missing_product() {
        let mut store = CatalogStore::in_memory();
        let before = store.products();
        let missing = ProductId::new("404");

        assert!(
            store
                .update_product(&missing, ProductPatch::default())
                .expect("update")
                .is_none()
        );
        assert!(!store.delete_product(&missing).expect("delete"));
        assert_eq!(store.products(), before);
    }

    #[test]
    fn test_featured_and_category_listings() {
        let store = CatalogStore::in_memory();
        let featured: Vec<_> = store.featured().into_iter().map(|p| p.id).collect();
        assert_eq!(featured, ["1", "2", "3", "4"].map(ProductId::new).to_vec());

        let gold: Vec<_> = store.by_category(Category::Gold).into_iter().map(|p| p.name).collect();
        assert_eq!(gold, vec!["Gold Necklace", "Gold Bracelet", "Gold Studs"]);
    }

    #[test]
    fn test_json_catalog_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("products.json");

        let mut store = CatalogStore::open(Box::new(JsonFileBackend::new(&path))).expect("open");
        let added = store.add_product(earrings()).expect("add");
        assert!(store.delete_product(&ProductId::new("1")).expect("delete"));
        drop(store);

        let reopened = CatalogStore::open(Box::new(JsonFileBackend::new(&path))).expect("reopen");
        assert_eq!(reopened.products().len(), 8);
        assert_eq!(reopened.product(&added.id), Some(added));
        assert!(reopened.product(&ProductId::new("1")).is_none());
    }
}
