//! Application state owned by the page.
//!
//! The page used to keep cart, favorites, and filter state in ambient
//! globals that every handler reached for. [`Storefront`] replaces that:
//! one aggregate, constructed once at startup, passed by handle to
//! whichever handlers need it. All mutations flow through it so every
//! store change also reaches the event sinks (badge, toasts, anything
//! else the page registers).

use std::cell::RefCell;
use std::rc::Rc;

use lumiere_core::{CartItemId, CategoryFilter, Email, EmailError, Product};

use crate::cart::{CartItem, CartStore, CartTotal};
use crate::catalog::{CatalogView, SortKey};
use crate::clock::{Clock, SystemClock};
use crate::config::StorefrontConfig;
use crate::error::StoreError;
use crate::events::{CartBadge, Event, EventBus, EventSink};
use crate::favorites::FavoriteStore;
use crate::newsletter;
use crate::notifications::{Toast, ToastQueue};
use crate::storage::KeyValueStorage;

/// The single owned application state.
pub struct Storefront<S> {
    config: StorefrontConfig,
    cart: CartStore<S>,
    favorites: FavoriteStore<S>,
    catalog: CatalogView,
    bus: EventBus,
    badge: Rc<RefCell<CartBadge>>,
    toasts: Rc<RefCell<ToastQueue>>,
}

impl<S: KeyValueStorage + Clone> Storefront<S> {
    /// Open the storefront over `storage` with the rendered catalog.
    ///
    /// Loading never hard-fails: corrupt persisted payloads are
    /// discarded and returned as diagnostics, an unavailable backend
    /// degrades to empty in-memory collections. The badge starts synced
    /// to the loaded cart length.
    pub fn open(
        config: StorefrontConfig,
        storage: S,
        products: Vec<Product>,
    ) -> (Self, Vec<StoreError>) {
        Self::open_with_clock(config, storage, products, Box::new(SystemClock))
    }

    /// [`Storefront::open`] with an explicit clock, for tests that pin
    /// item ID minting.
    pub fn open_with_clock(
        config: StorefrontConfig,
        storage: S,
        products: Vec<Product>,
        clock: Box<dyn Clock>,
    ) -> (Self, Vec<StoreError>) {
        let mut diagnostics = Vec::new();

        let (cart, diagnostic) =
            CartStore::open_lossy(storage.clone(), config.cart_key.clone(), clock);
        diagnostics.extend(diagnostic);

        let (favorites, diagnostic) =
            FavoriteStore::open_lossy(storage, config.favorites_key.clone());
        diagnostics.extend(diagnostic);

        let badge = Rc::new(RefCell::new(CartBadge::new()));
        badge.borrow_mut().sync(cart.len());

        let toasts = Rc::new(RefCell::new(ToastQueue::new(
            config.cart_toast,
            config.newsletter_toast,
        )));

        let mut bus = EventBus::new();
        bus.subscribe(badge.clone());
        bus.subscribe(toasts.clone());

        (
            Self {
                config,
                cart,
                favorites,
                catalog: CatalogView::new(products),
                bus,
                badge,
                toasts,
            },
            diagnostics,
        )
    }

    /// Register an additional event sink (notified after the built-ins).
    pub fn subscribe(&mut self, sink: Rc<RefCell<dyn EventSink>>) {
        self.bus.subscribe(sink);
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add `product` to the cart.
    pub fn add_to_cart(&mut self, product: &Product) -> CartItem {
        let item = self.cart.add_item(product);
        self.bus.emit(&Event::ItemAdded { item: item.clone() });
        item
    }

    /// Remove every cart entry with `id`; returns how many went.
    pub fn remove_from_cart(&mut self, id: CartItemId) -> usize {
        let removed = self.cart.remove_item(id);
        if removed > 0 {
            self.bus.emit(&Event::ItemRemoved { id, removed });
        }
        removed
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.bus.emit(&Event::CartCleared);
    }

    /// The cart's aggregate price.
    #[must_use]
    pub fn cart_total(&self) -> CartTotal {
        self.cart.total()
    }

    /// The cart store, for reads.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Toggle `name` in the favorite set; `true` means it was added.
    pub fn toggle_favorite(&mut self, name: &str) -> bool {
        let added = self.favorites.toggle(name);
        self.bus.emit(&Event::FavoriteToggled {
            name: name.to_owned(),
            added,
        });
        added
    }

    /// The favorites store, for reads.
    #[must_use]
    pub const fn favorites(&self) -> &FavoriteStore<S> {
        &self.favorites
    }

    // =========================================================================
    // Catalog view
    // =========================================================================

    /// Set the active category and get the visible list.
    pub fn set_category(&mut self, category: CategoryFilter) -> &[Product] {
        self.catalog.set_category(category)
    }

    /// Set the search term and get the visible list.
    pub fn set_search_term(&mut self, term: &str) -> &[Product] {
        self.catalog.set_search_term(term)
    }

    /// Set the sort key and get the visible list.
    pub fn set_sort(&mut self, sort: SortKey) -> &[Product] {
        self.catalog.set_sort(sort)
    }

    /// The catalog view, for reads.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    // =========================================================================
    // Newsletter, badge, toasts
    // =========================================================================

    /// Accept a newsletter signup if the address validates.
    ///
    /// # Errors
    ///
    /// Returns the validation failure for the caller to show inline; no
    /// event is emitted for a rejected signup.
    pub fn subscribe_newsletter(&mut self, input: &str) -> Result<Email, EmailError> {
        let email = newsletter::subscribe(input)?;
        self.bus.emit(&Event::NewsletterSubscribed {
            email: email.clone(),
        });
        Ok(email)
    }

    /// The cart badge count as currently displayed.
    #[must_use]
    pub fn badge_count(&self) -> usize {
        self.badge.borrow().count()
    }

    /// Take the oldest pending toast, if any.
    pub fn next_toast(&mut self) -> Option<Toast> {
        self.toasts.borrow_mut().pop()
    }

    /// The loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lumiere_core::Category;

    use super::*;
    use crate::clock::FixedClock;
    use crate::notifications::CART_MESSAGE;
    use crate::storage::MemoryStorage;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Tee A", "20€", "/img/tee-a.jpg", Category::Homme),
            Product::new("Tee B", "15€", "/img/tee-b.jpg", Category::Femme),
        ]
    }

    fn open(storage: MemoryStorage, clock: FixedClock) -> Storefront<MemoryStorage> {
        let (storefront, diagnostics) = Storefront::open_with_clock(
            StorefrontConfig::default(),
            storage,
            catalog(),
            Box::new(clock),
        );
        assert!(diagnostics.is_empty());
        storefront
    }

    #[test]
    fn test_add_updates_badge_and_toasts() {
        let mut storefront = open(MemoryStorage::new(), FixedClock::at(1_000));
        let product = storefront.catalog().products()[0].clone();

        storefront.add_to_cart(&product);
        assert_eq!(storefront.badge_count(), 1);

        let toast = storefront.next_toast().unwrap();
        assert_eq!(toast.message, CART_MESSAGE);
        assert!(storefront.next_toast().is_none());
    }

    #[test]
    fn test_remove_absent_emits_nothing() {
        let mut storefront = open(MemoryStorage::new(), FixedClock::at(1_000));
        assert_eq!(storefront.remove_from_cart(CartItemId::from_millis(7)), 0);
        assert_eq!(storefront.badge_count(), 0);
        assert!(storefront.next_toast().is_none());
    }

    #[test]
    fn test_badge_syncs_to_persisted_cart_on_open() {
        let storage = MemoryStorage::new();
        let clock = FixedClock::at(1_000);
        {
            let mut storefront = open(storage.clone(), clock.clone());
            let product = storefront.catalog().products()[0].clone();
            storefront.add_to_cart(&product);
            clock.advance(1);
            storefront.add_to_cart(&product);
        }

        let storefront = open(storage, FixedClock::at(2_000));
        assert_eq!(storefront.badge_count(), 2);
        assert_eq!(storefront.cart().len(), 2);
    }

    #[test]
    fn test_corrupt_payload_comes_back_as_diagnostic() {
        let mut storage = MemoryStorage::new();
        storage.set("cart", "oops").unwrap();

        let (storefront, diagnostics) = Storefront::open_with_clock(
            StorefrontConfig::default(),
            storage,
            catalog(),
            Box::new(FixedClock::at(0)),
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            diagnostics.first(),
            Some(StoreError::CorruptState { .. })
        ));
        assert!(storefront.cart().is_empty());
    }

    #[test]
    fn test_newsletter_rejection_emits_nothing() {
        let mut storefront = open(MemoryStorage::new(), FixedClock::at(0));
        assert!(storefront.subscribe_newsletter("pas-un-email").is_err());
        assert!(storefront.next_toast().is_none());

        storefront.subscribe_newsletter("claire@example.fr").unwrap();
        assert!(storefront.next_toast().is_some());
    }

    #[test]
    fn test_catalog_delegation() {
        let mut storefront = open(MemoryStorage::new(), FixedClock::at(0));
        let visible = storefront.set_category("femme".parse().unwrap());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Tee B");
    }

    #[test]
    fn test_toggle_favorite_roundtrip() {
        let mut storefront = open(MemoryStorage::new(), FixedClock::at(0));
        assert!(storefront.toggle_favorite("Tee A"));
        assert!(storefront.favorites().contains("Tee A"));
        assert!(!storefront.toggle_favorite("Tee A"));
        assert!(storefront.favorites().is_empty());
    }
}
