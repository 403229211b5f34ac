//! Identity effect: refetch products whenever the signed-in user changes

use shared::UserProfile;
use tokio::sync::watch;

use crate::http::ProductSource;
use crate::orchestrator::FetchOrchestrator;

/// Watches the identity signal and starts a fetch run per change
///
/// Runs are spawned, not awaited: a change arriving mid-run begins a new
/// run immediately and the old one is left to finish against a stale
/// token.
pub struct IdentityEffect<S: ?Sized> {
    orchestrator: FetchOrchestrator<S>,
    identity: watch::Receiver<Option<UserProfile>>,
}

impl<S> IdentityEffect<S>
where
    S: ProductSource + ?Sized + 'static,
{
    pub fn new(
        orchestrator: FetchOrchestrator<S>,
        identity: watch::Receiver<Option<UserProfile>>,
    ) -> Self {
        Self {
            orchestrator,
            identity,
        }
    }

    /// Begin a run for the current identity and spawn it
    fn trigger(&mut self) {
        let user = self.identity.borrow_and_update().clone();
        let controller = self.orchestrator.controller();
        let token = controller.begin_run();
        let preference = user.as_ref().and_then(UserProfile::dietary_preference);
        tracing::debug!(
            generation = token.generation(),
            signed_in = user.is_some(),
            "identity changed, refetching products"
        );

        let orchestrator = self.orchestrator.clone();
        tokio::spawn(async move {
            orchestrator.run_with(token, preference).await;
        });
    }

    /// Run once for the current identity, then once per change until the
    /// identity sender is dropped or the view unmounts
    pub async fn run(mut self) {
        self.trigger();
        while self.identity.changed().await.is_ok() {
            if !self.orchestrator.controller().is_mounted() {
                break;
            }
            self.trigger();
        }
        tracing::debug!("identity effect stopped");
    }
}
