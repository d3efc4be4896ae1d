//! Toast notification scheduling.
//!
//! The stores never render anything; they emit events. This queue turns
//! the ones with user-facing copy into [`Toast`] entries with a display
//! duration, and the presentation layer drains it on its own clock. The
//! core never calls into animation code directly.

use std::collections::VecDeque;
use std::time::Duration;

use crate::events::{Event, EventSink};

/// Copy shown when an item lands in the cart.
pub const CART_MESSAGE: &str = "Produit ajouté au panier !";
/// Copy shown after a newsletter signup.
pub const NEWSLETTER_MESSAGE: &str = "Merci pour votre inscription !";

/// A transient message with its display duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// User-facing message text.
    pub message: String,
    /// How long the presentation layer should keep it on screen.
    pub duration: Duration,
}

/// Queue of pending toasts, fed by store events.
#[derive(Debug)]
pub struct ToastQueue {
    cart_duration: Duration,
    newsletter_duration: Duration,
    queue: VecDeque<Toast>,
}

impl ToastQueue {
    /// Create a queue with the configured display durations.
    #[must_use]
    pub const fn new(cart_duration: Duration, newsletter_duration: Duration) -> Self {
        Self {
            cart_duration,
            newsletter_duration,
            queue: VecDeque::new(),
        }
    }

    /// Take the oldest pending toast, if any.
    pub fn pop(&mut self) -> Option<Toast> {
        self.queue.pop_front()
    }

    /// Number of pending toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl EventSink for ToastQueue {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::ItemAdded { .. } => self.queue.push_back(Toast {
                message: CART_MESSAGE.to_owned(),
                duration: self.cart_duration,
            }),
            Event::NewsletterSubscribed { .. } => self.queue.push_back(Toast {
                message: NEWSLETTER_MESSAGE.to_owned(),
                duration: self.newsletter_duration,
            }),
            // removals, clears, and favorite toggles have no toast copy
            Event::ItemRemoved { .. }
            | Event::CartCleared
            | Event::FavoriteToggled { .. } => {}
        }
    }
}
