//! Screen load orchestrator
//!
//! Converts lifecycle and user inputs into phase transitions, runs the
//! configuration load off the interaction path, and publishes the resulting
//! render plan or error message through the view port.
//!
//! # Architecture
//!
//! ```text
//! screen_became_active / retry_requested
//!   ↓
//! ScreenController (collapses re-entrant loads)
//!   ↓
//! ConfigLoaderPort::load → RenderPlan::compose
//!   ↓
//! ScreenViewPort signals (loading_started → render | show_error)
//! ```

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use mb_core::config::ConfigError;
use mb_core::ports::{ConfigLoaderPort, ImageCatalogPort, ScreenViewPort};
use mb_core::screen::{RenderPlan, ScreenPhase};

/// Helper for constructing the controller with explicit dependency fields.
pub struct ScreenControllerDeps {
    pub loader: Arc<dyn ConfigLoaderPort>,
    pub catalog: Arc<dyn ImageCatalogPort>,
    pub view: Arc<dyn ScreenViewPort>,
}

/// Orchestrates the configuration-load-and-render pipeline for the screen.
///
/// Owns the screen phase and the last published render plan. Both are
/// replaced together under one lock, so the presentation layer never
/// observes a partially applied load.
pub struct ScreenController {
    loader: Arc<dyn ConfigLoaderPort>,
    catalog: Arc<dyn ImageCatalogPort>,
    view: Arc<dyn ScreenViewPort>,
    state: Mutex<ScreenState>,
}

#[derive(Default)]
struct ScreenState {
    phase: ScreenPhase,
    plan: Option<RenderPlan>,
}

impl ScreenController {
    /// Create a new controller instance.
    pub fn new(
        loader: Arc<dyn ConfigLoaderPort>,
        catalog: Arc<dyn ImageCatalogPort>,
        view: Arc<dyn ScreenViewPort>,
    ) -> Self {
        Self {
            loader,
            catalog,
            view,
            state: Mutex::new(ScreenState::default()),
        }
    }

    /// Construct a controller from dependency bundle.
    pub fn from_deps(deps: ScreenControllerDeps) -> Self {
        let ScreenControllerDeps {
            loader,
            catalog,
            view,
        } = deps;

        Self::new(loader, catalog, view)
    }

    /// Current phase of the screen state machine.
    pub async fn phase(&self) -> ScreenPhase {
        self.state.lock().await.phase
    }

    /// Last successfully published render plan, if any.
    ///
    /// A failed load leaves the previous plan in place until a later load
    /// succeeds.
    pub async fn current_plan(&self) -> Option<RenderPlan> {
        self.state.lock().await.plan.clone()
    }

    /// Lifecycle trigger: the screen was shown or came back to the
    /// foreground.
    ///
    /// Reloads unconditionally, replacing a currently published plan once
    /// the new load succeeds. A trigger that arrives while a load is in
    /// flight collapses into it.
    #[tracing::instrument(name = "screen.activate", skip(self))]
    pub async fn screen_became_active(&self) {
        self.begin_load().await;
    }

    /// User input: retry after a failed load.
    ///
    /// Only applies while the screen is in the failed state; in every other
    /// phase the request is ignored.
    #[tracing::instrument(name = "screen.retry", skip(self))]
    pub async fn retry_requested(&self) {
        if !self.state.lock().await.phase.can_retry() {
            debug!("retry requested outside failed state, ignoring");
            return;
        }

        self.begin_load().await;
    }

    /// Run one load attempt: transition to `Loading`, fetch and decode the
    /// configuration, then publish exactly one of `render`/`show_error`.
    async fn begin_load(&self) {
        {
            let mut state = self.state.lock().await;
            match state.phase.on_load() {
                Some(next) => state.phase = next,
                None => {
                    debug!("load already in flight, collapsing");
                    return;
                }
            }
        }

        self.view.loading_started().await;

        let outcome = self.loader.load().await;

        // The lock stays held across the publish so a reload that begins
        // while we publish cannot interleave its signals with ours.
        let mut state = self.state.lock().await;
        match outcome {
            Ok(config) => {
                let plan = RenderPlan::compose(&config, self.catalog.as_ref());
                state.phase = state.phase.on_success();
                state.plan = Some(plan.clone());
                debug!(slots = plan.slots.len(), "configuration loaded");
                self.view.render(plan).await;
            }
            Err(err) => {
                warn!(error = %err, "configuration load failed");
                state.phase = state.phase.on_failure();
                self.view.show_error(user_message(&err)).await;
            }
        }
    }
}

/// Map a load failure onto the message shown to the user.
///
/// Every failure reaches the presentation layer; nothing is swallowed.
fn user_message(err: &ConfigError) -> String {
    match err {
        ConfigError::ResourceNotFound => {
            "Configuration file not found. Please ensure the config resource exists in the app bundle."
                .to_string()
        }
        ConfigError::Read(cause) => {
            format!("The configuration file could not be read: {cause}")
        }
        ConfigError::Decode(cause) => {
            format!("The configuration file is invalid: {cause}")
        }
    }
}
