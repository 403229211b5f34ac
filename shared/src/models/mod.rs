//! Data models
//!
//! Shared between the product backend and the storefront client (via API).

pub mod category;
pub mod product;
pub mod user;

// Re-exports
pub use category::*;
pub use product::*;
pub use user::*;
