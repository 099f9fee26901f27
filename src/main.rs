//! bastion-inventory - Ansible inventory generator
//!
//! Turns the output of `terraform output -json` into a static Ansible inventory
//! for hosts reached through a bastion.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod inventory;
mod logging;
mod path_utils;
mod ssh;
mod terraform;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::generate::run(&cli.generate, cli.quiet) {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  {}", help);
        }
        std::process::exit(1);
    }
}
