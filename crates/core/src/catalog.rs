//! Product records and the read-only catalog interface.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Product categories carried by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Jackets,
    Vests,
    Gloves,
    Socks,
    Hoodies,
    Accessories,
}

impl Category {
    /// All categories in shop-filter display order.
    pub const ALL: [Self; 6] = [
        Self::Jackets,
        Self::Vests,
        Self::Gloves,
        Self::Socks,
        Self::Hoodies,
        Self::Accessories,
    ];

    /// The lowercase code used in filter chips.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Jackets => "jackets",
            Self::Vests => "vests",
            Self::Gloves => "gloves",
            Self::Socks => "socks",
            Self::Hoodies => "hoodies",
            Self::Accessories => "accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jackets" => Ok(Self::Jackets),
            "vests" => Ok(Self::Vests),
            "gloves" => Ok(Self::Gloves),
            "socks" => Ok(Self::Socks),
            "hoodies" => Ok(Self::Hoodies),
            "accessories" => Ok(Self::Accessories),
            _ => Err(CategoryParseError(s.to_owned())),
        }
    }
}

/// Error parsing a category code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized category: {0}")]
pub struct CategoryParseError(pub String);

/// Shop-page category filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only products in this category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    /// The filter-chip code (`all` or a category code).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.code(),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<Category>().map(Self::Only)
    }
}

/// A purchasable product supplied by the catalog collaborator.
///
/// Immutable from the storefront's perspective; cart lines copy the
/// fields they need at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    /// Display glyph standing in for product photography.
    pub image: String,
    pub description: String,
}

/// Read-only product source.
///
/// Implemented by the static in-memory catalog today; designed to be
/// replaced by a backend data store without changing the cart or routing
/// contracts.
pub trait Catalog {
    /// All products in catalog order.
    fn products(&self) -> &[Product];

    /// Look up a product by id.
    fn find(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|product| product.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_all_matches_everything() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn test_category_filter_only_matches_itself() {
        let filter = CategoryFilter::Only(Category::Gloves);
        assert!(filter.matches(Category::Gloves));
        assert!(!filter.matches(Category::Jackets));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "socks".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Socks)
        );
        assert!("mittens".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_codes_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.code().parse::<Category>().unwrap(), category);
        }
    }
}
