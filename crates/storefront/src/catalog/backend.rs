//! Storage backends for the product catalog.
//!
//! A backend persists the whole product list as one unit. `load` returning
//! `None` means the list has never been stored, which is different from a
//! stored empty list: only the former triggers seeding.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::CatalogError;
use crate::models::Product;

/// Persistence for the product list.
pub trait CatalogBackend: Send + Sync + std::fmt::Debug {
    /// Read the stored list, or `None` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored data exists but cannot be read.
    fn load(&self) -> Result<Option<Vec<Product>>, CatalogError>;

    /// Replace the stored list.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be written.
    fn save(&mut self, products: &[Product]) -> Result<(), CatalogError>;
}

/// Volatile, process-local storage.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    products: Option<Vec<Product>>,
}

impl MemoryBackend {
    /// Storage that already holds `products`, so no seeding happens.
    #[must_use]
    pub const fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Some(products),
        }
    }
}

impl CatalogBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Vec<Product>>, CatalogError> {
        Ok(self.products.clone())
    }

    fn save(&mut self, products: &[Product]) -> Result<(), CatalogError> {
        self.products = Some(products.to_vec());
        Ok(())
    }
}

/// Storage in a single JSON file. A missing file means "nothing stored".
///
/// Reads and writes use blocking `std::fs` calls. The file holds one small
/// product list, so a save completes well within a request.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CatalogError {
        CatalogError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CatalogBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<Vec<Product>>, CatalogError> {
        let contents = match std::fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        let products = serde_json::from_slice(&contents)?;
        Ok(Some(products))
    }

    fn save(&mut self, products: &[Product]) -> Result<(), CatalogError> {
        let json = serde_json::to_vec_pretty(products)?;

        // Write beside the target and rename over it so readers never see
        // a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}
