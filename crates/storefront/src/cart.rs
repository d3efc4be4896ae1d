//! The persisted shopping cart.
//!
//! An ordered list of line items, mirrored to storage after every
//! mutation. The list is the source of truth for the session; storage is
//! a best-effort mirror that page reloads recover from.

use lumiere_core::{CartItemId, Price, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::error::{Result, StoreError};
use crate::storage::{KeyValueStorage, StorageError};

const fn one() -> u32 {
    1
}

/// One line in the cart.
///
/// Repeated adds of the same product append duplicate lines rather than
/// incrementing `quantity`; the field exists for forward compatibility
/// and is always 1 today. Older persisted carts predate `quantity` and
/// `image_url`, so both tolerate absence on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Removal key; timestamp-derived, collides under same-millisecond
    /// adds (see [`CartItemId`]).
    pub id: CartItemId,
    /// Product display name.
    pub name: String,
    /// Display-formatted price string, exactly as the catalog showed it.
    pub price: String,
    /// Product image URL.
    #[serde(default)]
    pub image_url: String,
    /// Always 1; duplicates model repeated adds.
    #[serde(default = "one")]
    pub quantity: u32,
}

/// The aggregate price of a cart.
///
/// Items whose price string does not parse contribute zero to `amount`
/// and are flagged in `unparsable` so the caller can warn instead of
/// silently misreporting the total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartTotal {
    /// Sum of all parsable line prices.
    pub amount: Decimal,
    /// IDs of lines whose price could not be parsed.
    pub unparsable: Vec<CartItemId>,
}

/// The cart store.
///
/// Owns the in-memory list and a storage handle; every mutation
/// synchronously rewrites the full list under the configured key. A
/// failed write never fails the mutation - the session continues on
/// in-memory state and the failure is kept in
/// [`CartStore::last_write_error`].
pub struct CartStore<S> {
    storage: S,
    key: String,
    clock: Box<dyn Clock>,
    items: Vec<CartItem>,
    last_write_error: Option<StorageError>,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Open the cart stored under `key`, strictly.
    ///
    /// A missing key is an empty cart, and an unavailable backend
    /// degrades to an empty in-memory cart with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CorruptState`] if a payload is present but
    /// does not parse; use [`CartStore::open_lossy`] to recover with an
    /// empty cart instead.
    pub fn open(storage: S, key: impl Into<String>, clock: Box<dyn Clock>) -> Result<Self> {
        let (store, diagnostic) = Self::open_lossy(storage, key, clock);
        match diagnostic {
            Some(err) => Err(err),
            None => Ok(store),
        }
    }

    /// Open the cart stored under `key`, recovering from corruption.
    ///
    /// A corrupt payload is discarded: the returned store starts empty
    /// and the diagnostic is returned alongside for the caller to
    /// surface. This is the page-load path - loading never hard-fails.
    pub fn open_lossy(
        storage: S,
        key: impl Into<String>,
        clock: Box<dyn Clock>,
    ) -> (Self, Option<StoreError>) {
        let key = key.into();
        let (items, diagnostic) = match storage.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => (items, None),
                Err(e) => {
                    warn!(key = %key, error = %e, "discarding corrupt cart payload");
                    (
                        Vec::new(),
                        Some(StoreError::CorruptState {
                            key: key.clone(),
                            reason: e.to_string(),
                        }),
                    )
                }
            },
            Ok(None) => (Vec::new(), None),
            Err(e) => {
                warn!(key = %key, error = %e, "storage unavailable, starting with empty cart");
                (Vec::new(), None)
            }
        };

        (
            Self {
                storage,
                key,
                clock,
                items,
                last_write_error: None,
            },
            diagnostic,
        )
    }

    /// Append a line item for `product` and persist.
    ///
    /// The ID is minted from the clock at call time. Two adds within the
    /// same millisecond produce colliding IDs; that is preserved
    /// behavior, not a bug to fix here.
    pub fn add_item(&mut self, product: &Product) -> CartItem {
        let item = CartItem {
            id: self.clock.mint_id(),
            name: product.name.clone(),
            price: product.price.clone(),
            image_url: product.image_url.clone(),
            quantity: 1,
        };
        self.items.push(item.clone());
        debug!(id = %item.id, name = %item.name, "item added to cart");
        self.persist();
        item
    }

    /// Remove every entry whose ID equals `id` and persist.
    ///
    /// Returns how many entries were removed; an absent ID removes
    /// nothing and is not an error. Under an ID collision this removes
    /// all colliding entries at once.
    pub fn remove_item(&mut self, id: CartItemId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = before - self.items.len();
        if removed > 0 {
            debug!(id = %id, removed, "items removed from cart");
            self.persist();
        }
        removed
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cart cleared");
        self.persist();
    }

    /// Sum the cart's line prices.
    #[must_use]
    pub fn total(&self) -> CartTotal {
        let mut total = CartTotal::default();
        for item in &self.items {
            match Price::parse(&item.price) {
                Ok(price) => total.amount += price.amount,
                Err(e) => {
                    warn!(id = %item.id, price = %item.price, error = %e, "unparsable price counted as zero");
                    total.unparsable.push(item.id);
                }
            }
        }
        total
    }

    /// The line items, in append order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The error from the most recent persistence attempt, if it failed.
    #[must_use]
    pub const fn last_write_error(&self) -> Option<&StorageError> {
        self.last_write_error.as_ref()
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.items) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart serialization failed, skipping write");
                self.last_write_error = Some(StorageError::Unavailable {
                    reason: e.to_string(),
                });
                return;
            }
        };
        match self.storage.set(&self.key, &raw) {
            Ok(()) => self.last_write_error = None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart write failed, continuing in memory");
                self.last_write_error = Some(e);
            }
        }
    }
}
