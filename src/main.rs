mod bootstrap;
mod view;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mb_core::screen::ScreenPhase;

use crate::bootstrap::AppContainer;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let bundle_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("resources"));

    info!(bundle = %bundle_dir.display(), "starting menuboard");

    let container = AppContainer::new(bundle_dir).await?;
    let controller = container.create_main_flow();

    // First load when the screen comes up.
    controller.screen_became_active().await;

    // Error-retry loop: offer a retry while the screen is in the failed state.
    while controller.phase().await == ScreenPhase::Failed {
        if !view::confirm_retry().await? {
            break;
        }
        controller.retry_requested().await;
    }

    Ok(())
}
