use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use mb_core::config::{ConfigError, ScreenConfig};
use mb_core::ports::ConfigLoaderPort;

/// File name of the configuration resource inside the bundle.
pub const CONFIG_RESOURCE: &str = "config.json";

/// Loads the screen configuration from a bundle directory on disk.
///
/// Stateless apart from the bundle path: every call reads the file fresh,
/// so concurrent loads never observe each other.
pub struct BundleConfigLoader {
    bundle_dir: PathBuf,
}

impl BundleConfigLoader {
    pub fn new(bundle_dir: impl Into<PathBuf>) -> Self {
        Self {
            bundle_dir: bundle_dir.into(),
        }
    }

    fn resource_path(&self) -> PathBuf {
        self.bundle_dir.join(CONFIG_RESOURCE)
    }
}

#[async_trait]
impl ConfigLoaderPort for BundleConfigLoader {
    async fn load(&self) -> Result<ScreenConfig, ConfigError> {
        let path = self.resource_path();

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::ResourceNotFound);
            }
            Err(err) => return Err(ConfigError::Read(err)),
        };

        let config: ScreenConfig = serde_json::from_slice(&bytes).map_err(ConfigError::Decode)?;

        debug!(path = %path.display(), "configuration decoded");
        Ok(config)
    }
}
