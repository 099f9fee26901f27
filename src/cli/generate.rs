use std::path::PathBuf;

use clap::Args;

use crate::config::Overrides;
use crate::ssh::SshStrategy;

/// Arguments for inventory generation
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to Terraform outputs JSON
    #[arg(long, value_name = "PATH", default_value = "terraform_outputs.json")]
    pub outputs: PathBuf,

    /// Path to write the inventory YAML (parent directories are created)
    #[arg(long, value_name = "PATH", default_value = "inventories/from_terraform.yml")]
    pub inventory: PathBuf,

    /// Private key path [default: ~/.ssh/digitalocean, or $ANSIBLE_SSH_KEY_PATH]
    #[arg(long, value_name = "PATH")]
    pub ssh_key: Option<PathBuf>,

    /// How frontend and backend hosts are reached through the bastion [default: agent-forwarding]
    #[arg(long, value_enum)]
    pub strategy: Option<SshStrategy>,

    /// Login user on bastion hosts [default: ansible]
    #[arg(long, value_name = "USER")]
    pub bastion_user: Option<String>,

    /// User for the hop through the bastion [default: the bastion user]
    #[arg(long, value_name = "USER")]
    pub jump_user: Option<String>,

    /// Login user on frontend and backend hosts [default: root]
    #[arg(long, value_name = "USER")]
    pub host_user: Option<String>,

    /// Keep SSH host key verification enabled for hosts behind the bastion
    #[arg(long)]
    pub strict_host_key_checking: bool,

    /// Omit frontend and backend hosts whose environment has no bastion
    #[arg(long)]
    pub skip_unrouted: bool,

    /// YAML configuration file with SSH settings
    #[arg(long, value_name = "PATH", env = "BASTION_INVENTORY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the inventory to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            strategy: self.strategy,
            key_path: self.ssh_key.clone(),
            bastion_user: self.bastion_user.clone(),
            jump_user: self.jump_user.clone(),
            host_user: self.host_user.clone(),
            strict_host_key_checking: self.strict_host_key_checking,
            skip_unrouted: self.skip_unrouted,
        }
    }
}
