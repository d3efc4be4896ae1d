//! Newtype IDs for type-safe entity references.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a cart line item.
///
/// Minted from the wall clock at creation time (milliseconds since the
/// Unix epoch), matching the storefront's historical behavior. Two items
/// added within the same clock millisecond therefore share an ID, and
/// removal by that ID removes both entries. Callers that need to observe
/// that behavior can pin the clock; nothing in the store assumes
/// uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(i64);

impl CartItemId {
    /// Create an ID from a millisecond timestamp.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Get the underlying millisecond value.
    #[must_use]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CartItemId {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl From<CartItemId> for i64 {
    fn from(id: CartItemId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let id = CartItemId::from_millis(1_700_000_000_123);
        assert_eq!(id.as_millis(), 1_700_000_000_123);
        assert_eq!(i64::from(id), 1_700_000_000_123);
        assert_eq!(CartItemId::from(1_700_000_000_123), id);
    }

    #[test]
    fn test_serde_transparent() {
        let id = CartItemId::from_millis(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let back: CartItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display() {
        assert_eq!(CartItemId::from_millis(7).to_string(), "7");
    }
}
