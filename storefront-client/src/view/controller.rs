//! View state controller
//!
//! Sole owner of [`ViewState`]. Fetch runs write through [`RunToken`]s: each
//! `begin_run` bumps the generation, and a write carrying an older
//! generation, or arriving after `unmount`, is dropped. UI events and the
//! cart reactor write through their own methods and are never gated by a
//! run.
//!
//! Every accepted mutation publishes a snapshot on a `watch` channel.
//! Unmounting closes that channel.

use std::sync::{Mutex, MutexGuard, PoisonError};

use shared::Product;
use tokio::sync::watch;

use super::{ProductsByCategory, ViewState};

/// Capability to write fetch results for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken {
    generation: u64,
}

impl RunToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outbound UI events
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Open the detail overlay for a product
    SelectProduct(Product),
    CloseDetail,
    CloseCartPanel,
}

#[derive(Debug)]
struct Inner {
    state: ViewState,
    generation: u64,
    mounted: bool,
    /// `None` once unmounted
    snapshots: Option<watch::Sender<ViewState>>,
}

impl Inner {
    fn publish(&self) {
        if let Some(snapshots) = &self.snapshots {
            snapshots.send_replace(self.state.clone());
        }
    }
}

#[derive(Debug)]
pub struct ViewController {
    inner: Mutex<Inner>,
}

impl ViewController {
    /// Fresh controller, as on mount
    pub fn new() -> Self {
        let state = ViewState::default();
        let (snapshots, _) = watch::channel(state.clone());
        Self {
            inner: Mutex::new(Inner {
                state,
                generation: 0,
                mounted: true,
                snapshots: Some(snapshots),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Receive a snapshot after every accepted change
    ///
    /// After `unmount` the receiver holds the final state and is already
    /// closed.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        let inner = self.lock();
        match &inner.snapshots {
            Some(snapshots) => snapshots.subscribe(),
            None => watch::channel(inner.state.clone()).1,
        }
    }

    pub fn snapshot(&self) -> ViewState {
        self.lock().state.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.lock().mounted
    }

    /// Whether `token` still belongs to the active run
    pub fn is_current(&self, token: RunToken) -> bool {
        let inner = self.lock();
        inner.mounted && inner.generation == token.generation
    }

    /// Apply `f` and publish, unless unmounted or `token` is stale
    fn apply<F>(&self, token: Option<RunToken>, f: F) -> bool
    where
        F: FnOnce(&mut ViewState),
    {
        let mut inner = self.lock();
        if !inner.mounted {
            return false;
        }
        if let Some(token) = token
            && token.generation != inner.generation
        {
            return false;
        }
        f(&mut inner.state);
        inner.publish();
        true
    }

    /// Start a new fetch run: supersede any previous run, clear the error
    /// and enter loading
    ///
    /// After `unmount` the returned token is already stale and the state is
    /// left alone.
    pub fn begin_run(&self) -> RunToken {
        let mut inner = self.lock();
        if !inner.mounted {
            return RunToken {
                generation: inner.generation,
            };
        }
        inner.generation += 1;
        inner.state.error = None;
        inner.state.loading = true;
        inner.publish();
        RunToken {
            generation: inner.generation,
        }
    }

    /// Replace the product mapping with a completed run's result
    pub fn commit_products(&self, token: RunToken, products: ProductsByCategory) -> bool {
        self.apply(Some(token), |state| state.products = products)
    }

    /// Record the run's failure message; products keep their previous value
    pub fn record_error(&self, token: RunToken, message: impl Into<String>) -> bool {
        let message = message.into();
        self.apply(Some(token), |state| state.error = Some(message))
    }

    /// Leave loading at the end of a run, whatever its outcome
    pub fn finish_run(&self, token: RunToken) -> bool {
        self.apply(Some(token), |state| state.loading = false)
    }

    /// Force the cart panel open
    pub fn open_cart_panel(&self) -> bool {
        self.apply(None, |state| state.cart_panel_open = true)
    }

    pub fn dispatch(&self, event: ViewEvent) -> bool {
        match event {
            ViewEvent::SelectProduct(product) => {
                self.apply(None, |state| state.selected_product = Some(product))
            }
            ViewEvent::CloseDetail => self.apply(None, |state| state.selected_product = None),
            ViewEvent::CloseCartPanel => self.apply(None, |state| state.cart_panel_open = false),
        }
    }

    /// Tear down: every outstanding token goes stale, no further writes
    /// are accepted and subscribers see the channel close
    pub fn unmount(&self) {
        let mut inner = self.lock();
        if inner.mounted {
            inner.mounted = false;
            inner.generation += 1;
            inner.snapshots = None;
            tracing::debug!(generation = inner.generation, "view unmounted");
        }
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}
