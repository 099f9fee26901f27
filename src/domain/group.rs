//! Inventory groups

use std::fmt;

use super::{Environment, Role};

/// A named set of hosts in the generated inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Every host
    All,
    /// All hosts of one environment
    Environment(Environment),
    /// All hosts of one role, across environments
    Role(Role),
    /// Frontend and backend hosts
    AppServers,
}

impl Group {
    /// Groups in the order they appear in the inventory document
    pub const ORDERED: [Group; 7] = [
        Group::All,
        Group::Environment(Environment::Staging),
        Group::Environment(Environment::Production),
        Group::Role(Role::Bastion),
        Group::Role(Role::Frontend),
        Group::Role(Role::Backend),
        Group::AppServers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Group::All => "all",
            Group::Environment(env) => env.as_str(),
            Group::Role(role) => role.as_str(),
            Group::AppServers => "app_servers",
        }
    }

    /// Groups implied by a host's attributes
    pub fn memberships(role: Role, environment: Environment) -> Vec<Group> {
        let mut groups = vec![
            Group::All,
            Group::Environment(environment),
            Group::Role(role),
        ];
        if role.is_app_server() {
            groups.push(Group::AppServers);
        }
        groups
    }

    pub fn contains(self, role: Role, environment: Environment) -> bool {
        Group::memberships(role, environment).contains(&self)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
