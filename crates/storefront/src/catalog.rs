//! The transient catalog view.
//!
//! Three independent criteria - category, search term, sort key - over
//! the full product list. Every change recomputes the visible list from
//! scratch, so criteria never compound destructively: relaxing a filter
//! brings products back. Nothing here is persisted; a reload starts
//! over.

use std::cmp::Reverse;

use lumiere_core::{CategoryFilter, Price, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error returned when a sort option string is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort key: {0:?}")]
pub struct SortKeyParseError(pub String);

/// The ordering applied to the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Original catalog order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl std::str::FromStr for SortKey {
    type Err = SortKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            other => Err(SortKeyParseError(other.to_owned())),
        }
    }
}

/// The catalog view state and its derived visible list.
pub struct CatalogView {
    products: Vec<Product>,
    category: CategoryFilter,
    search_term: String,
    sort: SortKey,
    visible: Vec<Product>,
}

impl CatalogView {
    /// Create a view over the full catalog; everything starts visible,
    /// in catalog order.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut view = Self {
            visible: Vec::with_capacity(products.len()),
            products,
            category: CategoryFilter::default(),
            search_term: String::new(),
            sort: SortKey::default(),
        };
        view.recompute();
        view
    }

    /// Set the active category filter and recompute.
    pub fn set_category(&mut self, category: CategoryFilter) -> &[Product] {
        self.category = category;
        self.recompute();
        &self.visible
    }

    /// Set the search term and recompute. Empty means no search filter.
    pub fn set_search_term(&mut self, term: &str) -> &[Product] {
        self.search_term = term.to_lowercase();
        self.recompute();
        &self.visible
    }

    /// Set the sort key and recompute.
    pub fn set_sort(&mut self, sort: SortKey) -> &[Product] {
        self.sort = sort;
        self.recompute();
        &self.visible
    }

    /// The currently visible products, filtered and ordered.
    #[must_use]
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// The full catalog, in original order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    fn recompute(&mut self) {
        self.visible = self
            .products
            .iter()
            .filter(|p| self.category.matches(p.category))
            .filter(|p| {
                self.search_term.is_empty() || p.name.to_lowercase().contains(&self.search_term)
            })
            .cloned()
            .collect();

        // Stable sorts: equal keys keep catalog order.
        match self.sort {
            SortKey::Default => {}
            SortKey::PriceAsc => self.visible.sort_by_cached_key(price_key),
            SortKey::PriceDesc => self.visible.sort_by_cached_key(|p| Reverse(price_key(p))),
            SortKey::NameAsc => self.visible.sort_by_cached_key(name_key),
            SortKey::NameDesc => self.visible.sort_by_cached_key(|p| Reverse(name_key(p))),
        }
    }
}

/// Price sort key; unparsable prices sort as zero, consistent with how
/// they total.
fn price_key(product: &Product) -> Decimal {
    Price::parse(&product.price).map_or(Decimal::ZERO, |p| p.amount)
}

/// Caseless name sort key.
fn name_key(product: &Product) -> String {
    product.name.to_lowercase()
}
