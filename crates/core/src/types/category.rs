//! Product categories and the category filter.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a category string is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0:?}")]
pub struct CategoryParseError(pub String);

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Homme,
    Femme,
}

impl Category {
    /// The category's value as rendered in filter buttons.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Homme => "homme",
            Self::Femme => "femme",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active category criterion of a catalog view.
///
/// `All` is the page-load default; clicking a category button narrows the
/// visible list to that category alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "homme" => Ok(Self::Only(Category::Homme)),
            "femme" => Ok(Self::Only(Category::Femme)),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(CategoryFilter::All.matches(Category::Homme));
        assert!(CategoryFilter::All.matches(Category::Femme));
        assert!(CategoryFilter::Only(Category::Femme).matches(Category::Femme));
        assert!(!CategoryFilter::Only(Category::Femme).matches(Category::Homme));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "homme".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Homme)
        );
        assert!("enfant".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Category::Femme).unwrap();
        assert_eq!(json, "\"femme\"");
    }
}
