//! Environment and role enumerations

use std::fmt;

/// A deployment stage with its own isolated set of hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Environment {
    Staging,
    Production,
}

impl Environment {
    /// Environments in the order they are processed
    pub const ALL: [Environment; 2] = [Environment::Staging, Environment::Production];

    /// Name used in output keys, host names and group names
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a host does within its environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// Public entry point into the private network
    Bastion,
    Frontend,
    Backend,
}

impl Role {
    /// Roles in the order they are processed
    pub const ALL: [Role; 3] = [Role::Bastion, Role::Frontend, Role::Backend];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Bastion => "bastion",
            Role::Frontend => "frontend",
            Role::Backend => "backend",
        }
    }

    /// Frontend and backend hosts live on the private network and are reached through the bastion
    pub fn is_app_server(self) -> bool {
        matches!(self, Role::Frontend | Role::Backend)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Staging.to_string(), "staging");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn test_environment_order() {
        assert_eq!(
            Environment::ALL,
            [Environment::Staging, Environment::Production]
        );
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Bastion.to_string(), "bastion");
        assert_eq!(Role::Frontend.to_string(), "frontend");
        assert_eq!(Role::Backend.to_string(), "backend");
    }

    #[test]
    fn test_role_is_app_server() {
        assert!(!Role::Bastion.is_app_server());
        assert!(Role::Frontend.is_app_server());
        assert!(Role::Backend.is_app_server());
    }
}
