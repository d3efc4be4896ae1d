//! Cart persistence scenarios.
//!
//! These exercise the cart store against both storage backends,
//! asserting the documented behaviors: append-order persistence,
//! same-millisecond ID collisions, soft write failures, and the
//! unparsable-price totals policy.

#![allow(clippy::unwrap_used)]

use std::str::FromStr;

use lumiere_core::{CartItemId, Category, Product};
use lumiere_integration_tests::{boutique_catalog, init_tracing};
use lumiere_storefront::cart::{CartItem, CartStore, CartTotal};
use lumiere_storefront::clock::FixedClock;
use lumiere_storefront::storage::{JsonFileStorage, KeyValueStorage, MemoryStorage};
use rust_decimal::Decimal;

fn open_cart<S: KeyValueStorage>(storage: S, clock: FixedClock) -> CartStore<S> {
    CartStore::open(storage, "cart", Box::new(clock)).expect("cart should open")
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn cart_length_tracks_number_of_adds() {
    init_tracing();
    let clock = FixedClock::at(1_000);
    let mut cart = open_cart(MemoryStorage::new(), clock.clone());

    for (i, product) in boutique_catalog().iter().cycle().take(5).enumerate() {
        clock.advance(i64::try_from(i).unwrap() + 1);
        cart.add_item(product);
    }

    assert_eq!(cart.len(), 5);
}

#[test]
fn reloading_mid_sequence_sees_the_same_list() {
    init_tracing();
    let storage = MemoryStorage::new();
    let clock = FixedClock::at(1_000);
    let mut cart = open_cart(storage.clone(), clock.clone());

    let catalog = boutique_catalog();
    cart.add_item(&catalog[0]);
    clock.advance(1);
    cart.add_item(&catalog[1]);

    // a second handle over the same storage loads exactly what was written
    let reloaded = open_cart(storage.clone(), FixedClock::at(0));
    assert_eq!(reloaded.items(), cart.items());

    clock.advance(1);
    cart.add_item(&catalog[2]);
    let reloaded = open_cart(storage, FixedClock::at(0));
    assert_eq!(reloaded.items(), cart.items());
    assert_eq!(reloaded.len(), 3);
}

#[test]
fn file_backend_roundtrips_element_wise() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("lumiere.json"));
    let clock = FixedClock::at(1_700_000_000_000);

    let mut cart = open_cart(storage.clone(), clock.clone());
    for product in boutique_catalog() {
        clock.advance(10);
        cart.add_item(&product);
    }

    let reloaded = open_cart(storage, FixedClock::at(0));
    assert_eq!(reloaded.items().to_vec(), cart.items().to_vec());
}

#[test]
fn persisted_payload_is_a_json_array_of_line_items() {
    init_tracing();
    let storage = MemoryStorage::new();
    let clock = FixedClock::at(1_700_000_000_000);
    let mut cart = open_cart(storage.clone(), clock.clone());

    cart.add_item(&boutique_catalog()[0]);
    clock.advance(1);
    cart.add_item(&boutique_catalog()[1]);

    let raw = storage.get("cart").unwrap().unwrap();
    let payload: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let lines = payload.as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["id"], 1_700_000_000_000_i64);
    assert_eq!(lines[0]["name"], "Tee A");
    assert_eq!(lines[0]["price"], "20€");
    assert_eq!(lines[0]["quantity"], 1);
}

#[test]
fn missing_key_loads_an_empty_cart() {
    init_tracing();
    let cart = open_cart(MemoryStorage::new(), FixedClock::at(0));
    assert!(cart.is_empty());
}

// ============================================================================
// ID collisions
// ============================================================================

#[test]
fn same_millisecond_adds_collide_and_remove_together() {
    init_tracing();
    let clock = FixedClock::at(1_000);
    let mut cart = open_cart(MemoryStorage::new(), clock);

    let catalog = boutique_catalog();
    let first = cart.add_item(&catalog[0]);
    let second = cart.add_item(&catalog[1]);

    // identical timestamps, identical IDs: the documented collision
    assert_eq!(first.id, second.id);
    assert_eq!(cart.len(), 2);

    assert_eq!(cart.remove_item(first.id), 2);
    assert!(cart.is_empty());
}

#[test]
fn distinct_milliseconds_remove_independently() {
    init_tracing();
    let clock = FixedClock::at(1_000);
    let mut cart = open_cart(MemoryStorage::new(), clock.clone());

    let catalog = boutique_catalog();
    let first = cart.add_item(&catalog[0]);
    clock.advance(1);
    cart.add_item(&catalog[1]);

    assert_eq!(cart.remove_item(first.id), 1);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].name, "Tee B");
}

#[test]
fn removing_an_absent_id_is_a_noop() {
    init_tracing();
    let mut cart = open_cart(MemoryStorage::new(), FixedClock::at(1_000));
    cart.add_item(&boutique_catalog()[0]);

    assert_eq!(cart.remove_item(CartItemId::from_millis(424_242)), 0);
    assert_eq!(cart.len(), 1);
}

// ============================================================================
// Totals
// ============================================================================

#[test]
fn clear_then_total_is_zero() {
    init_tracing();
    let clock = FixedClock::at(1_000);
    let mut cart = open_cart(MemoryStorage::new(), clock.clone());
    for product in &boutique_catalog() {
        clock.advance(1);
        cart.add_item(product);
    }
    cart.clear();

    assert_eq!(cart.total(), CartTotal::default());
    assert!(cart.is_empty());
}

#[test]
fn total_sums_display_prices_exactly() {
    init_tracing();
    let clock = FixedClock::at(1_000);
    let mut cart = open_cart(MemoryStorage::new(), clock.clone());
    for product in &boutique_catalog() {
        clock.advance(1);
        cart.add_item(product);
    }

    let total = cart.total();
    assert_eq!(total.amount, Decimal::from_str("65").unwrap());
    assert!(total.unparsable.is_empty());
}

#[test]
fn unparsable_price_counts_zero_and_is_flagged() {
    init_tracing();
    let clock = FixedClock::at(1_000);
    let mut cart = open_cart(MemoryStorage::new(), clock.clone());

    cart.add_item(&boutique_catalog()[0]);
    clock.advance(1);
    let odd = cart.add_item(&Product::new(
        "Écharpe",
        "prix sur demande",
        "/img/echarpe.jpg",
        Category::Femme,
    ));

    let total = cart.total();
    assert_eq!(total.amount, Decimal::from_str("20").unwrap());
    assert_eq!(total.unparsable, vec![odd.id]);
}

// ============================================================================
// Degraded storage
// ============================================================================

#[test]
fn mutations_survive_an_unavailable_backend() {
    init_tracing();
    let storage = MemoryStorage::new();
    storage.set_available(false);
    let mut cart = open_cart(storage.clone(), FixedClock::at(1_000));

    cart.add_item(&boutique_catalog()[0]);
    assert_eq!(cart.len(), 1);
    assert!(cart.last_write_error().is_some());

    storage.set_available(true);
    cart.clear();
    assert!(cart.last_write_error().is_none());
}

#[test]
fn corrupt_payload_reinitializes_with_a_diagnostic() {
    init_tracing();
    let mut storage = MemoryStorage::new();
    storage.set("cart", "{\"definitely\": \"not a cart\"}").unwrap();

    let (cart, diagnostic) =
        CartStore::open_lossy(storage, "cart", Box::new(FixedClock::at(0)));
    assert!(cart.is_empty());
    assert!(diagnostic.is_some());
}

#[test]
fn legacy_payload_shape_still_loads() {
    init_tracing();
    // two revisions ago the payload had no quantity or image_url
    let mut storage = MemoryStorage::new();
    storage
        .set(
            "cart",
            "[{\"id\": 1700000000000, \"name\": \"Tee A\", \"price\": \"20€\"}]",
        )
        .unwrap();

    let cart = open_cart(storage, FixedClock::at(0));
    let items: &[CartItem] = cart.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 1);
    assert_eq!(items[0].image_url, "");
}
