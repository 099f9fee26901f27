//! SSH access settings for generated hosts
//!
//! This module is organized into:
//! - strategy: how private hosts are reached through the bastion
//! - options: `-o Name=value` connection parameters and their rendering
//! - settings: users, host key checking and the jump parameters built from them
//! - key: private key path resolution from flags, environment and config

pub mod key;
pub mod options;
pub mod settings;
pub mod strategy;

pub use options::ConnectionParameters;
pub use settings::SshSettings;
pub use strategy::SshStrategy;
