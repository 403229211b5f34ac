//! Cart-visibility reactor
//!
//! Opens the cart panel whenever the cart size changes to a positive
//! count. This fires on every change while the cart stays non-empty
//! (3 → 5 reopens a panel the user closed), not only on the empty →
//! non-empty edge. The reactor never closes the panel.

use std::sync::Arc;

use tokio::sync::watch;

use crate::view::ViewController;

#[derive(Debug, Default)]
pub struct CartVisibilityReactor {
    last_seen: Option<usize>,
}

impl CartVisibilityReactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cart-size reading; true when the panel should be opened
    ///
    /// The first reading always counts as a change. Re-reading an
    /// unchanged count does nothing.
    pub fn observe(&mut self, count: usize) -> bool {
        if self.last_seen == Some(count) {
            return false;
        }
        self.last_seen = Some(count);
        count > 0
    }

    /// Feed a reading and apply it to `controller`
    pub fn apply(&mut self, count: usize, controller: &ViewController) -> bool {
        if self.observe(count) {
            tracing::debug!(count, "cart changed, opening cart panel");
            controller.open_cart_panel()
        } else {
            false
        }
    }

    /// React to `cart` until its sender is dropped or the view unmounts
    pub async fn watch(mut self, mut cart: watch::Receiver<usize>, controller: Arc<ViewController>) {
        loop {
            let count = *cart.borrow_and_update();
            self.apply(count, &controller);
            if !controller.is_mounted() || cart.changed().await.is_err() {
                break;
            }
        }
    }
}
