//! Port interfaces for the application layer
//!
//! Ports define the contract between the screen orchestration and
//! infrastructure implementations, keeping the load-and-render pipeline
//! independent of how the bundle is stored and which UI toolkit presents
//! the result.

mod config_loader;
mod image_catalog;
mod screen_view;

pub use config_loader::ConfigLoaderPort;
pub use image_catalog::ImageCatalogPort;
pub use screen_view::ScreenViewPort;
