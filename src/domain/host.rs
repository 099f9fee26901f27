//! Host record for one provisioned machine

use std::path::PathBuf;

use super::{Environment, Group, Role};
use crate::ssh::ConnectionParameters;

/// One provisioned machine as it appears in the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub environment: Environment,
    pub role: Role,
    /// IP address or hostname Ansible connects to
    pub address: String,
    pub user: String,
    /// Local private key, when the SSH strategy references one
    pub key_file: Option<PathBuf>,
    /// Present only for hosts reached through a bastion
    pub connection: Option<ConnectionParameters>,
}

impl Host {
    /// Unique inventory name, `{environment}-{role}`
    pub fn name(&self) -> String {
        format!("{}-{}", self.environment, self.role)
    }

    /// Whether the connection is routed through a jump host
    pub fn is_routed(&self) -> bool {
        self.connection
            .as_ref()
            .is_some_and(ConnectionParameters::is_jump)
    }

    pub fn in_group(&self, group: Group) -> bool {
        group.contains(self.role, self.environment)
    }
}
