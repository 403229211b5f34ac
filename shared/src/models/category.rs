//! Category Model
//!
//! The storefront sells from a fixed catalog of eight categories. Their
//! declaration order is the catalog order: it drives both the order in which
//! the client fetches them and the order in which sections are displayed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fruits,
    Vegetables,
    Dairy,
    Meat,
    Pantry,
    Beverages,
    Snacks,
    Household,
}

impl Category {
    /// Every category, in catalog order
    pub const ALL: [Category; 8] = [
        Category::Fruits,
        Category::Vegetables,
        Category::Dairy,
        Category::Meat,
        Category::Pantry,
        Category::Beverages,
        Category::Snacks,
        Category::Household,
    ];

    /// Wire name, as used in API paths and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fruits => "fruits",
            Category::Vegetables => "vegetables",
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Pantry => "pantry",
            Category::Beverages => "beverages",
            Category::Snacks => "snacks",
            Category::Household => "household",
        }
    }

    /// Human-readable section heading ("Fruits", "Household", ...)
    pub fn title(&self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Pantry => "Pantry",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::Household => "Household",
        }
    }

    /// Position in the catalog (0-based)
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown category name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}
