//! # Declaration Inheritance
//!
//! A profile may derive from another one. Groups, plugins and scripts are
//! keyed by name; a derived definition replaces the base one wholesale
//! (there is no field level merge), keeping the position of the base entry.
//! Chains resolve root to leaf.
pub mod declarations;
pub mod error;
pub mod resolver;

pub use declarations::{Declarations, Placement, StatementGroup};
pub use error::InheritanceError;
pub use resolver::InheritanceResolver;
