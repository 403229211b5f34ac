//! Category catalog and dietary preference filter

use shared::{Category, DietaryPreference};

/// Whether `category` is shown to a user with `preference`
///
/// Vegetarians never see meat; vegans see neither meat nor dairy. With no
/// (or an unrecognised) preference every category is shown.
pub fn include(category: Category, preference: Option<DietaryPreference>) -> bool {
    match preference {
        Some(DietaryPreference::Veg) => category != Category::Meat,
        Some(DietaryPreference::Vegan) => !matches!(category, Category::Meat | Category::Dairy),
        None => true,
    }
}

/// Categories to fetch for `preference`, in catalog order
pub fn included_categories(preference: Option<DietaryPreference>) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|c| include(*c, preference))
        .collect()
}
