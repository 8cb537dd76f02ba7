//! # Kernel
//!
//! Crate-wide constants and the aggregate [`Error`](error::Error) type every
//! subsystem error converts into.
pub mod constants;
pub mod error;

pub use error::{Error, Result};
