//! # Conditional Emission
//!
//! Turns declared statements into the literal lines of a config file for one
//! target version.
//!
//! - **[`statement`]**: [`ConditionalStatement`], a piece of config text with an
//!   optional [`VersionGate`](crate::version::VersionGate).
//! - **[`emitter`]**: [`ConditionalEmitter`], the stable filter over statements.
//!   It also splits multi-line text, strips key-binding notes the target cannot
//!   parse and guards against back-ticks when the file doubles as a script.
//! - **[`notes`]**: parsing of `bind -N "note"` annotations.
//! - **[`error`]**: [`EmitterError`].
pub mod emitter;
pub mod error;
pub mod notes;
pub mod statement;

pub use emitter::{ConditionalEmitter, NoteMode};
pub use error::EmitterError;
pub use statement::ConditionalStatement;
