//! # Multiplexer Versions
//!
//! Parsing and comparison of tmux version identifiers, and the gates built on
//! top of them.
//!
//! - **[`value`]**: [`VersionValue`], the comparable `major.minor[letter]` form,
//!   and [`VersionLiteral`], the three literal shapes authors may write.
//! - **[`gate`]**: [`VersionGate`], a minimum-version requirement or the skip
//!   sentinel.
//! - **[`context`]**: [`VersionContext`], the actual binary version paired with
//!   the version a config is being generated for.
//! - **[`detect`]**: extraction of a version from `tmux -V` / `tmate -V` output.
//! - **[`error`]**: [`VersionError`].
pub mod context;
pub mod detect;
pub mod error;
pub mod gate;
pub mod value;

pub use context::VersionContext;
pub use detect::{parse_version_output, BinaryKind, DetectedBinary};
pub use error::VersionError;
pub use gate::VersionGate;
pub use value::{VersionLiteral, VersionValue};

// Test module declaration
#[cfg(test)]
mod tests;
