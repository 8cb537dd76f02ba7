//! # Storage
//!
//! Filesystem access for the generator: the [`StorageProvider`] abstraction
//! with its local implementation, the profile loader that reads declaration
//! documents (JSON, YAML or TOML) along their `base` chain, and the writer
//! persisting a generated config together with its external scripts.
pub mod error;
pub mod local;
pub mod profile;
pub mod provider;
pub mod writer;

pub use error::StorageSystemError;
pub use local::LocalStorageProvider;
pub use profile::{Profile, ProfileDocument, ProfileFormat, ProfileLoader, ProfileSettings};
pub use provider::StorageProvider;
pub use writer::ConfigWriter;

#[cfg(test)]
mod tests;
