//! Semantic store events and their fan-out.
//!
//! The stores never touch a rendering technology. Instead, every mutation
//! produces an [`Event`] that the [`EventBus`] hands to registered sinks
//! in subscription order - the cart badge, the toast queue, whatever else
//! the page wires up. Dispatch is synchronous and single-threaded; there
//! is exactly one logical writer.

use std::cell::RefCell;
use std::rc::Rc;

use lumiere_core::{CartItemId, Email};

use crate::cart::CartItem;

/// A semantic notification emitted by a store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A line item was appended to the cart.
    ItemAdded {
        /// The created line item.
        item: CartItem,
    },
    /// Entries were removed from the cart by ID.
    ItemRemoved {
        /// The removal key.
        id: CartItemId,
        /// How many entries matched (more than one under an ID collision).
        removed: usize,
    },
    /// The cart was emptied.
    CartCleared,
    /// A product was added to or removed from the favorite set.
    FavoriteToggled {
        /// The product's display name.
        name: String,
        /// `true` when the toggle added the favorite.
        added: bool,
    },
    /// A newsletter signup was accepted.
    NewsletterSubscribed {
        /// The validated address.
        email: Email,
    },
}

/// A registered observer of store events.
pub trait EventSink {
    /// Called once per event, in emission order.
    fn notify(&mut self, event: &Event);
}

/// Ordered, synchronous fan-out of events to registered sinks.
///
/// Sinks are shared handles (`Rc<RefCell<_>>`) so the page can keep
/// reading a sink (badge count, queued toasts) after registering it.
#[derive(Default)]
pub struct EventBus {
    sinks: Vec<Rc<RefCell<dyn EventSink>>>,
}

impl EventBus {
    /// Create a bus with no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink. Sinks are notified in registration order.
    pub fn subscribe(&mut self, sink: Rc<RefCell<dyn EventSink>>) {
        self.sinks.push(sink);
    }

    /// Deliver `event` to every sink.
    pub fn emit(&self, event: &Event) {
        tracing::debug!(?event, "store event");
        for sink in &self.sinks {
            sink.borrow_mut().notify(event);
        }
    }

    /// Number of registered sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

/// The cart count badge.
///
/// Mirrors the cart length into a number the header renders next to the
/// cart icon. Kept consistent by deltas from the event stream, plus
/// [`CartBadge::sync`] at page load.
#[derive(Debug, Default)]
pub struct CartBadge {
    count: usize,
}

impl CartBadge {
    /// Create a badge showing zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the badge to a known cart length (page-load initialization).
    pub fn sync(&mut self, len: usize) {
        self.count = len;
    }

    /// The displayed count.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl EventSink for CartBadge {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::ItemAdded { .. } => self.count += 1,
            Event::ItemRemoved { removed, .. } => {
                self.count = self.count.saturating_sub(*removed);
            }
            Event::CartCleared => self.count = 0,
            Event::FavoriteToggled { .. } | Event::NewsletterSubscribed { .. } => {}
        }
    }
}
