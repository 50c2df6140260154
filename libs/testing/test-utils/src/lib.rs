//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: temp-file SQLite database with migrations applied (feature: "sqlite")
//! - `TestDataBuilder`: deterministic item payloads (always available)
//! - `assertions`: custom assertion helpers (always available)
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let payload = builder.item_payload("main");
//! }
//! ```

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};
use std::cell::RefCell;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::TestDatabase;

const CATEGORIES: [&str; 4] = ["Tools", "Toys", "Books", "Electronics"];

/// Builder for test data with deterministic randomization
///
/// Seeded from the test name so a failing test sees the same data on rerun.
pub struct TestDataBuilder {
    seed: u64,
    rng: RefCell<StdRng>,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique item name, e.g. `test-item-12345-main`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// One of a small fixed set of categories
    pub fn category(&self) -> &'static str {
        CATEGORIES
            .choose(&mut *self.rng.borrow_mut())
            .copied()
            .unwrap_or("Tools")
    }

    /// Price in [1, 100), two decimals
    pub fn price(&self) -> f64 {
        let raw: f64 = self.rng.borrow_mut().random_range(1.0..100.0);
        ((raw * 100.0).round() / 100.0).min(99.99)
    }

    /// A valid create/update body
    pub fn item_payload(&self, suffix: &str) -> Value {
        json!({
            "name": self.name("item", suffix),
            "category": self.category(),
            "price": self.price(),
            "description": format!("Generated for {}", suffix),
        })
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `values` is sorted by `key` in the given direction
    pub fn assert_sorted_by<T, K: PartialOrd>(values: &[T], key: impl Fn(&T) -> K, descending: bool) {
        for pair in values.windows(2) {
            let (a, b) = (key(&pair[0]), key(&pair[1]));
            if descending {
                assert!(a >= b, "expected descending order");
            } else {
                assert!(a <= b, "expected ascending order");
            }
        }
    }
}
