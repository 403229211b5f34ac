// storefront-client/tests/common/mod.rs
// Shared test doubles

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use storefront_client::{Category, ClientError, ClientResult, Product, ProductSource, ViewState};
use tokio::sync::{oneshot, watch};

/// Product source whose calls can be held open or failed by call index.
///
/// Call `n` answers with a single product `"{category}#{n}"`.
pub struct GatedSource {
    calls: Mutex<Vec<Category>>,
    holds: Mutex<HashMap<usize, oneshot::Receiver<()>>>,
    failures: Mutex<HashMap<Category, StatusCode>>,
    started: watch::Sender<usize>,
    completed: watch::Sender<usize>,
}

impl GatedSource {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            holds: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
            started: watch::channel(0).0,
            completed: watch::channel(0).0,
        }
    }

    /// Hold call `index` open until the returned sender fires (or drops)
    pub fn hold(&self, index: usize) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.holds.lock().unwrap().insert(index, rx);
        tx
    }

    /// Answer every request for `category` with `status`
    pub fn fail(&self, category: Category, status: StatusCode) {
        self.failures.lock().unwrap().insert(category, status);
    }

    pub fn calls(&self) -> Vec<Category> {
        self.calls.lock().unwrap().clone()
    }

    pub async fn wait_started(&self, count: usize) {
        let mut rx = self.started.subscribe();
        within(rx.wait_for(|n| *n >= count)).await.unwrap();
    }

    pub async fn wait_completed(&self, count: usize) {
        let mut rx = self.completed.subscribe();
        within(rx.wait_for(|n| *n >= count)).await.unwrap();
    }
}

#[async_trait]
impl ProductSource for GatedSource {
    async fn products_by_category(&self, category: Category) -> ClientResult<Vec<Product>> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(category);
            calls.len() - 1
        };
        self.started.send_modify(|n| *n += 1);

        let hold = self.holds.lock().unwrap().remove(&index);
        if let Some(rx) = hold {
            let _ = rx.await;
        }

        let failure = self.failures.lock().unwrap().get(&category).copied();
        self.completed.send_modify(|n| *n += 1);
        match failure {
            Some(status) => Err(ClientError::Status { status }),
            None => Ok(vec![
                Product::new(format!("{category}#{index}")).with_field("name", category.title()),
            ]),
        }
    }
}

/// Fail the test instead of hanging
pub async fn within<F: std::future::Future>(fut: F) -> F::Output {
    tokio::time::timeout(Duration::from_secs(5), fut)
        .await
        .expect("timed out waiting")
}

/// Wait until the view satisfies `predicate` and return that state
pub async fn wait_view(
    rx: &mut watch::Receiver<ViewState>,
    predicate: impl FnMut(&ViewState) -> bool,
) -> ViewState {
    let state = within(rx.wait_for(predicate)).await.unwrap();
    (*state).clone()
}

/// Product ids per category, in map order
pub fn ids(state: &ViewState) -> Vec<(Category, Vec<String>)> {
    state
        .products
        .iter()
        .map(|(category, products)| {
            (
                *category,
                products.iter().map(|p| p.id.clone()).collect(),
            )
        })
        .collect()
}
