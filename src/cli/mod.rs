//! CLI definitions using clap derive API
//!
//! - generate: arguments controlling input, output and SSH access settings

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

pub mod generate;

pub use generate::GenerateArgs;

/// bastion-inventory - Ansible inventory from Terraform outputs
///
/// Reads `terraform output -json` and writes a static inventory for hosts behind a bastion.
#[derive(Parser, Debug)]
#[command(
    name = "bastion-inventory",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate an Ansible inventory from Terraform outputs",
    long_about = "Generates a static Ansible inventory from the JSON written by \
                  'terraform output -json'. Bastion hosts are reached directly; frontend and \
                  backend hosts are reached through their environment's bastion.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bastion-inventory                                      \x1b[90m# terraform_outputs.json -> inventories/from_terraform.yml\x1b[0m\n   \
                  bastion-inventory --outputs out.json --inventory hosts.yml\n   \
                  bastion-inventory --strategy key-file --ssh-key ~/.ssh/deploy\n   \
                  bastion-inventory --dry-run                            \x1b[90m# Print the inventory instead of writing it\x1b[0m\n\n\
                  \x1b[1m\x1b[32mEnvironment:\x1b[0m\n   \
                  ANSIBLE_SSH_KEY_PATH      Default private key path\n   \
                  DO_SSH_KEY_PATH           Deprecated alias of ANSIBLE_SSH_KEY_PATH\n   \
                  BASTION_INVENTORY_CONFIG  Configuration file path\n"
)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Do not print the summary after writing
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["bastion-inventory"]).unwrap();
        assert_eq!(cli.generate.outputs, PathBuf::from("terraform_outputs.json"));
        assert_eq!(
            cli.generate.inventory,
            PathBuf::from("inventories/from_terraform.yml")
        );
        assert!(cli.generate.ssh_key.is_none());
        assert!(cli.generate.strategy.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["bastion-inventory", "-v", "-q"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["bastion-inventory", "--strategy", "telnet"]).is_err());
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
