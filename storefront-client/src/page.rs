//! Products page
//!
//! Ties the pieces together for one mounted page: a fresh
//! [`ViewController`], the identity effect driving fetch runs, and the cart
//! reactor. Must be mounted inside a tokio runtime.

use std::sync::Arc;

use shared::{Product, UserProfile};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::cart::CartVisibilityReactor;
use crate::http::ProductSource;
use crate::identity::IdentityEffect;
use crate::orchestrator::FetchOrchestrator;
use crate::view::{Screen, ViewController, ViewEvent, ViewState};

pub struct ProductsPage {
    controller: Arc<ViewController>,
    identity: watch::Receiver<Option<UserProfile>>,
    tasks: Vec<JoinHandle<()>>,
}

impl ProductsPage {
    /// Mount the page: start fetching for the current identity and begin
    /// watching both signals
    pub fn mount<S>(
        source: S,
        identity: watch::Receiver<Option<UserProfile>>,
        mut cart: watch::Receiver<usize>,
    ) -> Self
    where
        S: ProductSource + 'static,
    {
        let controller = Arc::new(ViewController::new());
        let orchestrator = FetchOrchestrator::new(Arc::new(source), Arc::clone(&controller));

        let effect = IdentityEffect::new(orchestrator, identity.clone());
        // The cart reading at mount is applied before returning.
        let mut reactor = CartVisibilityReactor::new();
        reactor.apply(*cart.borrow_and_update(), &controller);
        let tasks = vec![
            tokio::spawn(effect.run()),
            tokio::spawn(reactor.watch(cart, Arc::clone(&controller))),
        ];
        tracing::debug!("products page mounted");

        Self {
            controller,
            identity,
            tasks,
        }
    }

    pub fn controller(&self) -> &Arc<ViewController> {
        &self.controller
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.controller.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.controller.snapshot()
    }

    /// Current listing projection
    pub fn listing(&self) -> Screen {
        let state = self.controller.snapshot();
        let user = self.identity.borrow().clone();
        Screen::project(&state, user.as_ref())
    }

    /// Wait until no fetch run is loading and return that state
    ///
    /// Returns `None` if the page is unmounted while a run is still loading.
    pub async fn settled(&self) -> Option<ViewState> {
        let mut rx = self.controller.subscribe();
        let state = rx.wait_for(|state| !state.loading).await.ok()?;
        Some((*state).clone())
    }

    pub fn select_product(&self, product: Product) {
        self.controller.dispatch(ViewEvent::SelectProduct(product));
    }

    pub fn close_detail(&self) {
        self.controller.dispatch(ViewEvent::CloseDetail);
    }

    pub fn close_cart(&self) {
        self.controller.dispatch(ViewEvent::CloseCartPanel);
    }

    /// Tear down: pending runs can no longer write and the watchers stop
    pub fn unmount(&mut self) {
        self.controller.unmount();
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for ProductsPage {
    fn drop(&mut self) {
        self.unmount();
    }
}
