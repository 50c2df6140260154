//! Sample catalog used to populate an empty database.

use rand::Rng;

use crate::models::NewItem;

pub const ADJECTIVES: [&str; 15] = [
    "Premium",
    "Deluxe",
    "Compact",
    "Wireless",
    "Organic",
    "Vintage",
    "Modern",
    "Ultra",
    "Smart",
    "Eco-Friendly",
    "Portable",
    "Professional",
    "Classic",
    "Advanced",
    "Mini",
];

pub const NOUNS: [&str; 15] = [
    "Widget",
    "Gadget",
    "Tool",
    "Device",
    "Kit",
    "Set",
    "Pack",
    "Bundle",
    "System",
    "Module",
    "Adapter",
    "Controller",
    "Sensor",
    "Monitor",
    "Tracker",
];

pub const CATEGORIES: [&str; 10] = [
    "Electronics",
    "Books",
    "Clothing",
    "Home & Garden",
    "Sports",
    "Toys",
    "Food & Beverages",
    "Health",
    "Automotive",
    "Music",
];

const MIN_PRICE: f64 = 1.0;
const MAX_PRICE: f64 = 501.0;

fn pick<'a, R: Rng>(rng: &mut R, values: &[&'a str]) -> &'a str {
    values[rng.random_range(0..values.len())]
}

/// Generate `count` items numbered from 1.
pub fn generate_items<R: Rng>(count: usize, rng: &mut R) -> Vec<NewItem> {
    (1..=count)
        .map(|i| {
            let adjective = pick(rng, &ADJECTIVES);
            let noun = pick(rng, &NOUNS);
            let category = pick(rng, &CATEGORIES);
            let price = (rng.random_range(MIN_PRICE..MAX_PRICE) * 100.0).round() / 100.0;

            NewItem {
                name: format!("{adjective} {noun} {i}"),
                category: category.to_string(),
                price: price.min(MAX_PRICE - 0.01),
                description: Some(format!(
                    "High-quality {} {} in the {} category.",
                    adjective.to_lowercase(),
                    noun.to_lowercase(),
                    category.to_lowercase()
                )),
            }
        })
        .collect()
}
