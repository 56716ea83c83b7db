mod config_loader;
mod image_catalog;

pub use config_loader::{BundleConfigLoader, CONFIG_RESOURCE};
pub use image_catalog::BundledImageCatalog;
