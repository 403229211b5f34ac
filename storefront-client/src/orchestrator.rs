//! Fetch orchestrator
//!
//! One run fetches every category the user's preference allows, one
//! request at a time in catalog order, and commits the assembled mapping as
//! a whole. The first failure aborts the run and discards whatever was
//! collected. All writes go through the [`ViewController`] with the run's
//! token, so a superseded or unmounted run changes nothing.

use std::sync::Arc;

use shared::{Category, DietaryPreference, UserProfile};

use crate::catalog;
use crate::http::ProductSource;
use crate::view::{ProductsByCategory, RunToken, ViewController};
use crate::ClientResult;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Mapping committed
    Committed { categories: usize, products: usize },
    /// A request failed; message recorded in the view
    Failed(String),
    /// A newer run (or unmount) took over; nothing was written
    Superseded,
}

/// Sequentially fetch `categories` from `source`
///
/// Returns `Ok(None)` as soon as `is_active` reports the run is no longer
/// wanted; no further requests are issued then.
pub async fn fetch_catalog<S, F>(
    source: &S,
    categories: &[Category],
    is_active: F,
) -> ClientResult<Option<ProductsByCategory>>
where
    S: ProductSource + ?Sized,
    F: Fn() -> bool,
{
    let mut products = ProductsByCategory::new();
    for &category in categories {
        let items = source.products_by_category(category).await?;
        if !is_active() {
            return Ok(None);
        }
        tracing::debug!(%category, count = items.len(), "category fetched");
        products.insert(category, items);
    }
    Ok(Some(products))
}

/// Runs fetch cycles against a shared view controller
pub struct FetchOrchestrator<S: ?Sized> {
    source: Arc<S>,
    controller: Arc<ViewController>,
}

impl<S: ?Sized> Clone for FetchOrchestrator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            controller: Arc::clone(&self.controller),
        }
    }
}

impl<S> FetchOrchestrator<S>
where
    S: ProductSource + ?Sized,
{
    pub fn new(source: Arc<S>, controller: Arc<ViewController>) -> Self {
        Self { source, controller }
    }

    pub fn controller(&self) -> &Arc<ViewController> {
        &self.controller
    }

    /// Begin a run for `user` and drive it to completion
    pub async fn run(&self, user: Option<&UserProfile>) -> RunOutcome {
        let token = self.controller.begin_run();
        let preference = user.and_then(UserProfile::dietary_preference);
        self.run_with(token, preference).await
    }

    /// Drive an already-begun run
    ///
    /// The preference is fixed for the whole run.
    pub async fn run_with(
        &self,
        token: RunToken,
        preference: Option<DietaryPreference>,
    ) -> RunOutcome {
        let generation = token.generation();
        let categories = catalog::included_categories(preference);
        tracing::info!(
            generation,
            preference = preference.map(|p| p.as_str()).unwrap_or("none"),
            categories = categories.len(),
            "product fetch started"
        );

        let controller = &self.controller;
        let result = fetch_catalog(self.source.as_ref(), &categories, || {
            controller.is_current(token)
        })
        .await;

        let outcome = match result {
            Ok(Some(products)) => {
                let summary = RunOutcome::Committed {
                    categories: products.len(),
                    products: products.values().map(Vec::len).sum(),
                };
                if controller.commit_products(token, products) {
                    tracing::info!(generation, ?summary, "product fetch committed");
                    summary
                } else {
                    RunOutcome::Superseded
                }
            }
            Ok(None) => RunOutcome::Superseded,
            Err(e) => {
                let message = e.to_string();
                if controller.record_error(token, message.clone()) {
                    tracing::warn!(generation, error = %message, "product fetch failed");
                    RunOutcome::Failed(message)
                } else {
                    RunOutcome::Superseded
                }
            }
        };

        if !controller.finish_run(token) {
            tracing::debug!(generation, "superseded fetch dropped");
            return RunOutcome::Superseded;
        }
        outcome
    }
}
