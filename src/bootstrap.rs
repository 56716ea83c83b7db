//! Composition root: builds the bundle adapters and wires the main flow.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use mb_app::ScreenController;
use mb_infra::bundle::{BundleConfigLoader, BundledImageCatalog};

use crate::view::ConsoleScreenView;

/// Owns the long-lived collaborators and creates the main screen flow.
pub struct AppContainer {
    loader: Arc<BundleConfigLoader>,
    catalog: Arc<BundledImageCatalog>,
    view: Arc<ConsoleScreenView>,
}

impl AppContainer {
    /// Scan the bundle and construct the shared collaborators.
    pub async fn new(bundle_dir: PathBuf) -> Result<Self> {
        let catalog = BundledImageCatalog::scan(&bundle_dir).await?;
        info!(assets = catalog.len(), "bundle catalog ready");

        Ok(Self {
            loader: Arc::new(BundleConfigLoader::new(bundle_dir)),
            catalog: Arc::new(catalog),
            view: Arc::new(ConsoleScreenView),
        })
    }

    pub fn create_main_flow(&self) -> ScreenController {
        ScreenController::new(self.loader.clone(), self.catalog.clone(), self.view.clone())
    }
}
