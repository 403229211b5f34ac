//! User Model

use serde::{Deserialize, Serialize};

/// Dietary preference of a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPreference {
    /// Vegetarian
    Veg,
    Vegan,
}

impl DietaryPreference {
    /// Lenient parse: anything other than `"veg"` / `"vegan"` means no preference
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "veg" => Some(DietaryPreference::Veg),
            "vegan" => Some(DietaryPreference::Vegan),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::Veg => "veg",
            DietaryPreference::Vegan => "vegan",
        }
    }
}

/// Signed-in user, as supplied by the identity provider
///
/// Only `preference` is read by the storefront. It is kept as the raw string
/// the provider sent; unrecognised values are not validated or normalised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
}

impl UserProfile {
    /// Create a profile carrying only a raw preference value
    pub fn with_preference(preference: impl Into<String>) -> Self {
        Self {
            preference: Some(preference.into()),
            ..Self::default()
        }
    }

    /// Parsed dietary preference (`None` when absent or unrecognised)
    pub fn dietary_preference(&self) -> Option<DietaryPreference> {
        self.preference.as_deref().and_then(DietaryPreference::parse)
    }
}
