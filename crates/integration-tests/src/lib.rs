//! Integration tests for Lumière.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lumiere-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart` - Cart persistence, ID collisions, totals
//! - `catalog` - Category/search/sort view scenarios
//! - `storefront` - Aggregate state, events, badge, toasts
//!
//! This crate only holds shared fixtures; the scenarios live in
//! `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

use lumiere_core::{Category, Product};

static TRACING: Once = Once::new();

/// Initialize tracing once per test binary, honoring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The three-product boutique catalog the scenarios are written against.
#[must_use]
pub fn boutique_catalog() -> Vec<Product> {
    vec![
        Product::new("Tee A", "20€", "/img/tee-a.jpg", Category::Homme),
        Product::new("Tee B", "15€", "/img/tee-b.jpg", Category::Femme),
        Product::new("Tee C", "30€", "/img/tee-c.jpg", Category::Homme),
    ]
}

/// Display names of a product slice, for order assertions.
#[must_use]
pub fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}
