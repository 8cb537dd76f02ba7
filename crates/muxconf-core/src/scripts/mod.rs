//! # Auxiliary Scripts
//!
//! Shell helpers referenced from the generated config, either embedded at the
//! end of the config file itself or written as separate executable files.
//!
//! Embedding works because the config opens with `# : << MARKER`: piped
//! through `cut -c3-` the whole config becomes a shell script whose here-doc
//! swallows everything up to the script block.
pub mod catalog;
pub mod error;
pub mod placeholders;
pub mod registry;
pub mod spec;

pub use catalog::{ExternalScript, ScriptCatalog, ScriptMode};
pub use error::ScriptError;
pub use placeholders::expand_placeholders;
pub use registry::ScriptRegistry;
pub use spec::ScriptSpec;

#[cfg(test)]
mod tests;
