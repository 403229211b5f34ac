//! View layer: state, the controller that owns it, and the listing projection.

mod controller;
pub mod listing;
mod state;

pub use controller::{RunToken, ViewController, ViewEvent};
pub use listing::{CategorySection, Listing, Screen, scope_label};
pub use state::{Phase, ProductsByCategory, ViewState};
