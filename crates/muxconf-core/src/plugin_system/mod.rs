//! # Plugin System
//!
//! Declared plugins are partitioned per run into used, ignored (minimum
//! version not reached) and skipped (sentinel `-1`). Used plugins are written
//! to the config as `set -g @plugin` lines and installed either by tpm or by
//! a built-in manual installer script.
//!
//! ## Modules
//! - `entry`: [`PluginEntry`], one declared plugin
//! - `catalog`: [`PluginCatalog`] and the resolution into [`PluginResolution`]
//! - `handler`: [`PluginHandler`], which installer is deployed
//! - `environment`: where plugins live on disk
//! - `deployment`: config lines and scripts for used plugins and the handler
//! - `display`: the plugin report printed by the CLI
pub mod catalog;
pub mod deployment;
pub mod display;
pub mod entry;
pub mod environment;
pub mod error;
pub mod handler;

pub use catalog::{PluginCatalog, PluginResolution, resolve_entries};
pub use deployment::PluginDeployment;
pub use display::{DisplayMode, PluginReport};
pub use entry::PluginEntry;
pub use environment::PluginEnvironment;
pub use error::PluginSystemError;
pub use handler::PluginHandler;

#[cfg(test)]
mod tests;
