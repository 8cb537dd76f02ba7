//! # muxconf core
//!
//! Generates tmux configuration files tailored to a specific tmux version.
//!
//! User declarations (statements, plugins and helper scripts, optionally
//! spread over a chain of profiles) are filtered against a target version:
//! statements requiring a newer tmux are left out, key-binding notes are
//! stripped where unsupported, and plugins are partitioned into used, ignored
//! and skipped sets.
//!
//! ## Modules
//! - [`version`]: version values, gates and detection of the installed binary
//! - [`emitter`]: version-gated statements and the emitter filtering them
//! - [`plugin_system`]: plugin catalog, handlers and deployment
//! - [`inheritance`]: base/derived declaration merging
//! - [`scripts`]: embedded and external helper scripts
//! - [`generator`]: whole-file assembly
//! - [`storage`]: filesystem access, profile loading and config writing
//! - [`kernel`]: constants and the crate error type
//! - [`utils`]: path helpers
pub mod emitter;
pub mod generator;
pub mod inheritance;
pub mod kernel;
pub mod plugin_system;
pub mod scripts;
pub mod storage;
pub mod utils;
pub mod version;

pub use emitter::{ConditionalEmitter, ConditionalStatement, NoteMode};
pub use generator::{Generator, GeneratorSettings, ResolvedConfiguration};
pub use inheritance::{Declarations, InheritanceResolver, Placement, StatementGroup};
pub use kernel::error::{Error, Result};
pub use plugin_system::{PluginCatalog, PluginEntry, PluginHandler, PluginResolution};
pub use scripts::{ScriptCatalog, ScriptSpec};
pub use storage::{ConfigWriter, LocalStorageProvider, ProfileLoader, StorageProvider};
pub use version::{VersionContext, VersionGate, VersionValue};
