//! Launch content the store starts with.

use chrono::{DateTime, Utc};

use ratannam_core::{AboutId, BannerId, CategoryId, ContactId, IdGenerator, ProductId, ReviewId};

use super::{ContentIds, ContentStore};
use crate::models::{AboutContent, Banner, CategoryContent, ContactContent, Review, TrendingProduct};

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3567.234567890123!2d73.3398456!3d25.7678901!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x396f17568e55e555%3A0x8e6a0c8f0c0f0c0f!2sPali%2C%20Rajasthan%2C%20India!5e0!3m2!1sen!2sin!4v1234567890123!5m2!1sen!2sin";

/// Build the seeded store. Seed IDs come from the same generators later
/// additions use, so nothing added afterwards can collide with them.
pub(super) fn launch_content(now: DateTime<Utc>) -> ContentStore {
    let mut ids = ContentIds::default();

    let banners = vec![Banner {
        id: BannerId::new(next(&mut ids.banners)),
        title: "Timeless Beauty, Crafted for You".to_string(),
        subtitle: "Experience the finest collection of Hallmark Gold, Diamond & Polki Jadau Jewellery in Pali.".to_string(),
        image_url: "https://images.unsplash.com/photo-1602751584552-8ba43dcb13be?q=80&w=2000&auto=format&fit=crop".to_string(),
        cta_text: "Explore Collection".to_string(),
        cta_url: "/products".to_string(),
        enabled: true,
        display_order: 1,
        created_at: now,
        updated_at: now,
    }];

    let categories = [
        ("Gold Jewellery", "https://images.unsplash.com/photo-1601121141461-9d6647bca1ed?q=80&w=800"),
        ("Silver Artifacts", "https://images.unsplash.com/photo-1569397288884-4d43d6738fbd?q=80&w=800"),
        ("Bridal Sets", "https://images.unsplash.com/photo-1543294001-f7cd5d7fb516?q=80&w=800"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, image_url), display_order)| CategoryContent {
        id: CategoryId::new(next(&mut ids.categories)),
        name: name.to_string(),
        image_url: image_url.to_string(),
        enabled: true,
        display_order,
        created_at: now,
        updated_at: now,
    })
    .collect();

    let trending = (1..=4)
        .map(|n| TrendingProduct {
            product_id: ProductId::new(n.to_string()),
            display_order: n,
            enabled: true,
            created_at: now,
            updated_at: now,
        })
        .collect();

    let about = AboutContent {
        id: AboutId::new(AboutContent::DEFAULT_ID),
        title: "Our Story".to_string(),
        description: "For over 30 years, Ratannam Gold has been crafting timeless jewelry pieces that celebrate life's most precious moments.".to_string(),
        image_url: "https://images.unsplash.com/photo-1581044777552-2176120200c3?q=80&w=800&auto=format&fit=crop".to_string(),
        bullet_points: vec![
            "Quality Craftsmanship".to_string(),
            "Trusted Legacy".to_string(),
            "Timeless Designs".to_string(),
        ],
        enabled: true,
        created_at: now,
        updated_at: now,
    };

    let contact = ContactContent {
        id: ContactId::new(ContactContent::DEFAULT_ID),
        address: "123 Jewelry Street, Pali, Rajasthan 306401".to_string(),
        email: "info@ratannamgold.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        whatsapp: "+91 98765 43210".to_string(),
        working_hours: "Monday - Saturday: 10:00 AM - 8:00 PM\nSunday: 11:00 AM - 6:00 PM".to_string(),
        map_embed_url: MAP_EMBED_URL.to_string(),
        enabled: true,
        created_at: now,
        updated_at: now,
    };

    let reviews = vec![Review {
        id: ReviewId::new(next(&mut ids.reviews)),
        name: "Priya Sharma".to_string(),
        comment: "The quality of gold and the intricacy of design at Ratannam is unmatched in Pali. Truly a luxury experience.".to_string(),
        rating: 5,
        customer_type: "Loyal Customer".to_string(),
        enabled: true,
        created_at: now,
        updated_at: now,
    }];

    ContentStore {
        banners,
        categories,
        trending,
        about: Some(about),
        contact: Some(contact),
        reviews,
        ids,
    }
}

fn next(ids: &mut IdGenerator) -> String {
    ids.next_id(|_| false)
}
