use crate::config::{ConfigError, ScreenConfig};
use async_trait::async_trait;

/// Configuration loader port - abstracts where the `config` resource lives.
///
/// One read per call, no shared mutable state across calls, so it is safe to
/// invoke repeatedly and from a background task. Exactly one of the result
/// variants is produced per attempt; a partially decoded configuration is
/// never returned.
#[async_trait]
pub trait ConfigLoaderPort: Send + Sync {
    /// Load and decode the bundled configuration resource.
    async fn load(&self) -> Result<ScreenConfig, ConfigError>;
}
