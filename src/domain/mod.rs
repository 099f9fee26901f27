//! Domain models for bastion-inventory
//!
//! This module contains pure domain objects describing provisioned hosts and the
//! inventory groups they belong to. Group membership is derived from a host's
//! role and environment only.

pub mod environment;
pub mod group;
pub mod host;

pub use environment::{Environment, Role};
pub use group::Group;
pub use host::Host;
