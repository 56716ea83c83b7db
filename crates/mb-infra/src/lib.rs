//! # mb-infra
//!
//! Infrastructure adapters for menuboard: the bundle-directory
//! implementations of the configuration loader and the image catalog ports.

pub mod bundle;
