//! Configuration handling for bastion-inventory
//!
//! This module contains:
//! - `file` - the optional YAML configuration file
//! - `settings` - resolution of command-line flags, environment and file into final settings

pub mod file;
pub mod settings;

pub use file::ConfigFile;
pub use settings::{GeneratorSettings, Overrides};
