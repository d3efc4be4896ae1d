//! Clock seam for minting cart item IDs.
//!
//! Item IDs are derived from the wall clock at creation time. The trait
//! exists so tests can pin the clock and assert the documented
//! same-millisecond collision behavior.

use lumiere_core::CartItemId;

/// Source of creation timestamps for cart item IDs.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Mint a cart item ID from the current instant.
    fn mint_id(&self) -> CartItemId {
        CartItemId::from_millis(self.now_millis())
    }
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A pinned clock for tests.
///
/// Shared via `Rc` so a test can advance the clock while the store holds
/// its own handle.
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    millis: std::rc::Rc<std::cell::Cell<i64>>,
}

impl FixedClock {
    /// Create a clock pinned at `millis`.
    #[must_use]
    pub fn at(millis: i64) -> Self {
        let clock = Self::default();
        clock.millis.set(millis);
        clock
    }

    /// Move the clock forward.
    pub fn advance(&self, millis: i64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }
}
