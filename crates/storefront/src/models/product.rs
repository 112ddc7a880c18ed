//! Catalog product model.

use serde::{Deserialize, Serialize};

use ratannam_core::{Category, Discount, Price, ProductId};

use super::{Patch, merge};

/// A piece of jewelry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    /// Image URL.
    pub image: String,
    /// Shown in featured listings.
    pub featured: bool,
    pub in_stock: bool,
    pub discount: Discount,
}

impl Product {
    /// The price after the product's discount.
    #[must_use]
    pub fn effective_price(&self) -> Price {
        self.price.discounted(self.discount)
    }
}

/// Input for adding a product to the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "super::enabled_by_default")]
    pub in_stock: bool,
    #[serde(default)]
    pub discount: Discount,
}

impl NewProduct {
    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image: self.image,
            featured: self.featured,
            in_stock: self.in_stock,
            discount: self.discount,
        }
    }
}

/// Partial update for a product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub category: Option<Category>,
    pub image: Option<String>,
    pub featured: Option<bool>,
    pub in_stock: Option<bool>,
    pub discount: Option<Discount>,
}

impl Patch<Product> for ProductPatch {
    fn apply_to(self, target: &mut Product) {
        merge(&mut target.name, self.name);
        merge(&mut target.description, self.description);
        merge(&mut target.price, self.price);
        merge(&mut target.category, self.category);
        merge(&mut target.image, self.image);
        merge(&mut target.featured, self.featured);
        merge(&mut target.in_stock, self.in_stock);
        merge(&mut target.discount, self.discount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn necklace() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Gold Necklace".to_string(),
            description: "Beautiful gold necklace".to_string(),
            price: Price::from_units(50_000),
            category: Category::Gold,
            image: String::new(),
            featured: true,
            in_stock: true,
            discount: Discount::percent_off(5),
        }
    }

    #[test]
    fn test_effective_price() {
        let mut product = necklace();
        assert_eq!(product.effective_price(), Price::from_units(47_500));

        product.discount = Discount::NONE;
        assert_eq!(product.effective_price(), product.price);
    }

    #[test]
    fn test_patch_keeps_unspecified_fields() {
        let mut product = necklace();
        ProductPatch {
            in_stock: Some(false),
            ..ProductPatch::default()
        }
        .apply_to(&mut product);

        assert!(!product.in_stock);
        assert_eq!(product.name, "Gold Necklace");
        assert_eq!(product.discount, Discount::percent_off(5));
    }

    #[test]
    fn test_new_product_accepts_numeric_price() {
        let input: NewProduct = serde_json::from_str(
            r#"{"name":"Ring","description":"d","price":1500,"category":"Silver","image":"i"}"#,
        )
        .expect("deserialize");
        assert_eq!(input.price, Price::from_units(1_500));
        assert!(input.in_stock);
        assert!(!input.discount.is_active());
    }
}
