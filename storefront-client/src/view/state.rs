//! View state

use std::collections::BTreeMap;

use shared::{Category, Product};

/// Products keyed by category
///
/// Keys exist only for categories that were fetched. A missing key means
/// "filtered out" or "not fetched"; the two are not told apart.
pub type ProductsByCategory = BTreeMap<Category, Vec<Product>>;

/// Fetch phase derived from `loading` / `error`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error,
    Ready,
}

/// Everything the product page renders from
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub products: ProductsByCategory,
    /// Product shown in the detail overlay
    pub selected_product: Option<Product>,
    pub cart_panel_open: bool,
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::Ready
        }
    }

    /// Products for `category`; empty when the key is absent
    pub fn products_for(&self, category: Category) -> &[Product] {
        self.products
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Default for ViewState {
    /// Fresh state on mount: loading, nothing fetched, overlays closed
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            products: ProductsByCategory::new(),
            selected_product: None,
            cart_panel_open: false,
        }
    }
}
