//! Storefront Client - product listing orchestration
//!
//! Fetches the product catalog category by category according to the
//! signed-in user's dietary preference, keeps the page's view state, and
//! reacts to identity and cart changes.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod identity;
pub mod logger;
pub mod orchestrator;
pub mod page;
pub mod view;

pub use cart::CartVisibilityReactor;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpProductSource, ProductSource};
pub use identity::IdentityEffect;
pub use orchestrator::{FetchOrchestrator, RunOutcome, fetch_catalog};
pub use page::ProductsPage;
pub use view::{Phase, ProductsByCategory, RunToken, Screen, ViewController, ViewEvent, ViewState};

// Re-export shared types for convenience
pub use shared::{Category, DietaryPreference, Product, UserProfile};
