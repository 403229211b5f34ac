//! Shared types for the storefront
//!
//! Domain models exchanged between the product backend and the
//! storefront client: catalog categories, opaque product records and
//! the signed-in user's profile.

pub mod models;

// Re-exports
pub use models::{Category, CategoryParseError, DietaryPreference, Product, UserProfile};
pub use serde::{Deserialize, Serialize};
