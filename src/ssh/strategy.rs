//! Transport strategy for hosts behind a bastion

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// How Ansible reaches frontend and backend hosts through the bastion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SshStrategy {
    /// ProxyJump through the bastion, forwarding the local SSH agent.
    /// Private keys never leave the local machine and are not referenced.
    #[default]
    AgentForwarding,
    /// ProxyJump through the bastion, authenticating with a local key file
    KeyFile,
    /// Raw `ProxyCommand` running `ssh -W` on the bastion with a local key file
    ProxyCommand,
}

impl SshStrategy {
    /// Whether hosts reference a local private key file, which must then exist
    pub fn uses_key_file(self) -> bool {
        matches!(self, SshStrategy::KeyFile | SshStrategy::ProxyCommand)
    }

    /// Human readable description used in the inventory header and the report
    pub fn description(self) -> &'static str {
        match self {
            SshStrategy::AgentForwarding => "ProxyJump + SSH Agent Forwarding",
            SshStrategy::KeyFile => "ProxyJump + Local Key File",
            SshStrategy::ProxyCommand => "ProxyCommand (ssh -W) + Local Key File",
        }
    }
}

impl fmt::Display for SshStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SshStrategy::AgentForwarding => "agent-forwarding",
            SshStrategy::KeyFile => "key-file",
            SshStrategy::ProxyCommand => "proxy-command",
        };
        f.write_str(name)
    }
}
