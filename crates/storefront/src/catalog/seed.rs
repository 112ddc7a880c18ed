//! Sample products stored the first time the catalog is opened.

use ratannam_core::{Category, Discount, Price, ProductId};

use crate::models::Product;

const NECKLACE_IMAGE: &str =
    "https://images.unsplash.com/photo-1602745587407-68946c0fa3d7?w=400&h=500&fit=crop";
const BANGLES_IMAGE: &str =
    "https://images.unsplash.com/photo-1618508782591-9e82d593e010?w=400&h=500&fit=crop";
const RING_IMAGE: &str =
    "https://images.unsplash.com/photo-1531078700948-d82e3e0c09d2?w=400&h=500&fit=crop";
const EARRINGS_IMAGE: &str =
    "https://images.unsplash.com/photo-1611854786443-9b7bc934e4a2?w=400&h=500&fit=crop";

/// The eight launch products, with IDs `1` through `8`.
pub(crate) fn sample_products() -> Vec<Product> {
    [
        ("Gold Necklace", "Beautiful gold necklace", 50_000, Category::Gold, NECKLACE_IMAGE, true, true, 5),
        ("Silver Bangles", "Elegant silver bangles", 8_000, Category::Silver, BANGLES_IMAGE, true, true, 10),
        ("Diamond Ring", "Sparkling diamond ring", 120_000, Category::Diamond, RING_IMAGE, true, false, 0),
        ("Artificial Earrings", "Designer artificial earrings", 1_500, Category::Artificial, EARRINGS_IMAGE, true, true, 15),
        ("Gold Bracelet", "Classic gold bracelet", 35_000, Category::Gold, EARRINGS_IMAGE, false, true, 8),
        ("Silver Chain", "Traditional silver chain", 12_000, Category::Silver, BANGLES_IMAGE, false, true, 0),
        ("Pearl Necklace", "Elegant pearl necklace", 25_000, Category::Diamond, RING_IMAGE, false, false, 12),
        ("Gold Studs", "Simple gold studs", 8_000, Category::Gold, NECKLACE_IMAGE, false, true, 0),
    ]
    .into_iter()
    .zip(1_u32..)
    .map(
        |((name, description, price, category, image, featured, in_stock, discount), n)| Product {
            id: ProductId::new(n.to_string()),
            name: name.to_string(),
            description: description.to_string(),
            price: Price::from_units(price),
            category,
            image: image.to_string(),
            featured,
            in_stock,
            discount: Discount::percent_off(discount),
        },
    )
    .collect()
}
