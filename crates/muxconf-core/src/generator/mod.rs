//! # Generator
//!
//! Assembles a complete config file from resolved declarations for one
//! [`VersionContext`](crate::version::VersionContext). Sections are written
//! in a fixed order:
//!
//! 1. here-doc opener hiding the config from `sh` (embedded scripts only)
//! 2. header and the `TMUX_BIN` / `TMUX_CONF` / `TMUX_SOURCE` variables
//! 3. `content` groups
//! 4. edit-config key binding
//! 5. plugin section
//! 6. `local_overrides` groups
//! 7. plugin handler deployment
//! 8. embedded scripts
pub mod config;
pub mod generator;
pub mod settings;

pub use config::ResolvedConfiguration;
pub use generator::Generator;
pub use settings::GeneratorSettings;
