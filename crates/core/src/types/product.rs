//! The read-only product record supplied by the presentation layer.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::price::{Price, PriceError};

/// A product as rendered in the catalog.
///
/// The rendering layer owns these records; the store only reads their
/// fields when filtering, sorting, and constructing cart line items. The
/// price stays in its display-formatted form so the cart shows exactly
/// what the catalog showed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, also the favorite key.
    pub name: String,
    /// Display-formatted price string (e.g., "20€").
    pub price: String,
    /// URL of the product image.
    pub image_url: String,
    /// Category the product is filed under.
    pub category: Category,
}

impl Product {
    /// Create a new product record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        image_url: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            image_url: image_url.into(),
            category,
        }
    }

    /// Parse the display-formatted price.
    ///
    /// # Errors
    ///
    /// Returns an error if the price string is not in a recognized format.
    pub fn parsed_price(&self) -> Result<Price, PriceError> {
        Price::parse(&self.price)
    }
}
