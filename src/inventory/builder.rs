//! Inventory builder
//!
//! Derives host records from Terraform outputs. For each environment, in order:
//!
//! 1. a known bastion address yields a bastion host with a direct connection;
//! 2. a known frontend or backend address yields a host routed through that
//!    bastion with the configured jump parameters;
//! 3. a frontend or backend without a known bastion is created without jump
//!    parameters (assumed directly routable), or omitted when `skip_unrouted` is set.
//!
//! The builder holds only borrowed settings and returns a finished [`Inventory`];
//! nothing is accumulated across calls.

use std::path::Path;

use crate::config::GeneratorSettings;
use crate::domain::{Environment, Host, Role};
use crate::terraform::TerraformOutputs;

use super::Inventory;

/// Builds an [`Inventory`] from Terraform outputs
#[derive(Debug, Clone, Copy)]
pub struct InventoryBuilder<'a> {
    settings: &'a GeneratorSettings,
}

impl<'a> InventoryBuilder<'a> {
    pub fn new(settings: &'a GeneratorSettings) -> Self {
        Self { settings }
    }

    pub fn build(&self, outputs: &TerraformOutputs) -> Inventory {
        let hosts = Environment::ALL
            .into_iter()
            .flat_map(|env| self.environment_hosts(env, outputs))
            .collect();
        Inventory::new(hosts)
    }

    fn environment_hosts(&self, environment: Environment, outputs: &TerraformOutputs) -> Vec<Host> {
        let bastion_address = outputs.address(environment, Role::Bastion);
        let mut hosts = Vec::with_capacity(Role::ALL.len());

        if let Some(address) = &bastion_address {
            hosts.push(self.bastion_host(environment, address));
        }

        for role in [Role::Frontend, Role::Backend] {
            let Some(address) = outputs.address(environment, role) else {
                continue;
            };

            match &bastion_address {
                Some(bastion) => hosts.push(self.routed_host(environment, role, address, bastion)),
                None if self.settings.skip_unrouted => {
                    tracing::warn!(
                        "skipping {environment}-{role}: no bastion address known for {environment}"
                    );
                }
                None => {
                    tracing::warn!(
                        "{environment}-{role} has no bastion in {environment}; \
                         assuming {address} is directly reachable"
                    );
                    hosts.push(self.direct_host(environment, role, address));
                }
            }
        }

        tracing::debug!(%environment, hosts = hosts.len(), "derived hosts");
        hosts
    }

    fn bastion_host(&self, environment: Environment, address: &str) -> Host {
        Host {
            environment,
            role: Role::Bastion,
            address: address.to_string(),
            user: self.settings.ssh.bastion_user.clone(),
            key_file: self.settings.ssh.key_file().map(Path::to_path_buf),
            connection: None,
        }
    }

    fn routed_host(&self, environment: Environment, role: Role, address: String, bastion: &str) -> Host {
        Host {
            connection: Some(self.settings.ssh.jump_parameters(bastion)),
            ..self.direct_host(environment, role, address)
        }
    }

    fn direct_host(&self, environment: Environment, role: Role, address: String) -> Host {
        Host {
            environment,
            role,
            address,
            user: self.settings.ssh.host_user.clone(),
            key_file: self.settings.ssh.key_file().map(Path::to_path_buf),
            connection: None,
        }
    }
}
