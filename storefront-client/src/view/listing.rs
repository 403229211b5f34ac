//! Listing projection
//!
//! Reduces a [`ViewState`] (plus the signed-in user, if any) to what the
//! product page shows. Rendering itself belongs to the presentation layer.

use shared::{Category, DietaryPreference, Product, UserProfile};

use super::ViewState;

pub const ERROR_TITLE: &str = "Error loading products";
pub const EMPTY_MESSAGE: &str = "No products available at the moment.";

/// One category section of the listing
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub category: Category,
    pub products: Vec<Product>,
}

/// Listing body
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// "Showing ... products", only for signed-in users
    pub scope: Option<String>,
    pub sections: Vec<CategorySection>,
}

/// What the page shows
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading,
    Error(String),
    Empty { scope: Option<String> },
    Listing(Listing),
}

impl Screen {
    pub fn project(state: &ViewState, user: Option<&UserProfile>) -> Self {
        if state.loading {
            return Screen::Loading;
        }
        if let Some(message) = &state.error {
            return Screen::Error(message.clone());
        }

        let scope = user.map(|u| scope_label(u.dietary_preference()));
        if state.products.is_empty() {
            return Screen::Empty { scope };
        }

        // Catalog order; categories with nothing to show are left out.
        let sections = Category::ALL
            .into_iter()
            .filter_map(|category| {
                let products = state.products_for(category);
                (!products.is_empty()).then(|| CategorySection {
                    category,
                    products: products.to_vec(),
                })
            })
            .collect();

        Screen::Listing(Listing { scope, sections })
    }
}

/// Banner text describing which products are listed
pub fn scope_label(preference: Option<DietaryPreference>) -> String {
    let scope = match preference {
        Some(DietaryPreference::Vegan) => "vegan",
        Some(DietaryPreference::Veg) => "vegetarian",
        None => "all",
    };
    format!("Showing {scope} products")
}
