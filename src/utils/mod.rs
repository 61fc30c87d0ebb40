//! Utility functions and helpers
//!
//! Application paths and logging setup.

pub mod app_paths;
pub mod logging;

pub use app_paths::AppPaths;
