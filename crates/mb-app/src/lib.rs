//! Menuboard Application Orchestration Layer
//!
//! This crate contains the screen controller driving the
//! configuration-load-and-render pipeline.

pub mod controller;

pub use controller::{ScreenController, ScreenControllerDeps};
