//! Inventory construction, rendering and writing
//!
//! - `builder` derives hosts and their connection parameters from Terraform outputs
//! - `document` renders the Ansible YAML document with its generated header
//! - `writer` replaces the output file atomically

pub mod builder;
pub mod document;
pub mod writer;

pub use builder::InventoryBuilder;
pub use document::{Header, render};
pub use writer::write_atomic;

use crate::domain::{Group, Host};

/// Finished set of hosts; groups are derived from host attributes on demand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    hosts: Vec<Host>,
}

impl Inventory {
    /// Create an inventory, ordering hosts by name
    pub fn new(mut hosts: Vec<Host>) -> Self {
        hosts.sort_by_key(Host::name);
        Self { hosts }
    }

    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    #[cfg(test)]
    pub fn host(&self, name: &str) -> Option<&Host> {
        self.hosts.iter().find(|h| h.name() == name)
    }

    /// Hosts belonging to `group`, ordered by name
    pub fn group(&self, group: Group) -> Vec<&Host> {
        self.hosts.iter().filter(|h| h.in_group(group)).collect()
    }

    pub fn group_host_names(&self, group: Group) -> Vec<String> {
        self.group(group).into_iter().map(Host::name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
