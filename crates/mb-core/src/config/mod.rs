//! Screen configuration domain model and its load error taxonomy.

mod error;
mod screen_config;

pub use error::ConfigError;
pub use screen_config::ScreenConfig;
