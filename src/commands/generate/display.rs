//! Console summary printed after the inventory is written

use std::path::Path;

use console::Style;

use crate::config::GeneratorSettings;
use crate::domain::{Group, Host};
use crate::inventory::Inventory;

/// Print where the inventory went, how hosts are reached and which groups were produced
pub fn print_summary(path: &Path, settings: &GeneratorSettings, inventory: &Inventory) {
    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Inventory generated:"),
        path.display()
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("SSH strategy:"),
        settings.ssh.strategy.description()
    );
    if let Some(key) = settings.ssh.key_file() {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("SSH key:"),
            key.display()
        );
    }

    println!();
    println!("{}", Style::new().bold().apply_to("Groups:"));
    for group in Group::ORDERED.into_iter().filter(|g| *g != Group::All) {
        let names = inventory.group_host_names(group);
        let listed = if names.is_empty() {
            Style::new().dim().apply_to("(none)".to_string())
        } else {
            Style::new().apply_to(names.join(", "))
        };
        println!("  {} {}", Style::new().cyan().apply_to(format!("{group}:")), listed);
    }

    if inventory.is_empty() {
        return;
    }

    println!();
    println!("{}", Style::new().bold().apply_to("Connections:"));
    for host in inventory.hosts() {
        println!(
            "  {}: {} ({})",
            Style::new().yellow().apply_to(host.name()),
            host.address,
            connection_mode(host)
        );
    }
}

fn connection_mode(host: &Host) -> &'static str {
    if host.is_routed() {
        "through bastion"
    } else {
        "direct connection"
    }
}
