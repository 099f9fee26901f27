//! Ansible inventory document rendering
//!
//! The document is a comment header followed by YAML with one top-level key per
//! group, in the order of [`Group::ORDERED`]. Each group holds a `hosts` mapping
//! from host name to host variables. Only the header depends on when and from
//! where it was generated; the body is a function of the inventory alone.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::domain::{Group, Host};
use crate::error::{InventoryError, Result};
use crate::path_utils::to_inventory_path;
use crate::ssh::SshStrategy;

use super::Inventory;

/// Provenance written into the comment header
#[derive(Debug, Clone)]
pub struct Header {
    pub generated_at: DateTime<Local>,
    pub source: String,
    pub strategy: SshStrategy,
}

impl Header {
    pub fn now(source: impl Into<String>, strategy: SshStrategy) -> Self {
        Self {
            generated_at: Local::now(),
            source: source.into(),
            strategy,
        }
    }

    fn render(&self) -> String {
        format!(
            "# AUTO-GENERATED INVENTORY - DO NOT EDIT\n\
             # Generated: {}\n\
             # Source: {}\n\
             # SSH Strategy: {}\n\
             #\n",
            self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, false),
            comment_safe(&self.source),
            self.strategy.description()
        )
    }
}

/// Escape control characters so text stays on its comment line
fn comment_safe(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Variables attached to one host
#[derive(Debug, Clone, Serialize)]
struct HostVars {
    ansible_host: String,
    ansible_user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ansible_ssh_private_key_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ansible_ssh_common_args: Option<String>,
    role: &'static str,
    env_name: &'static str,
}

impl From<&Host> for HostVars {
    fn from(host: &Host) -> Self {
        Self {
            ansible_host: host.address.clone(),
            ansible_user: host.user.clone(),
            ansible_ssh_private_key_file: host.key_file.as_deref().map(to_inventory_path),
            ansible_ssh_common_args: host
                .connection
                .as_ref()
                .filter(|c| !c.is_empty())
                .map(crate::ssh::ConnectionParameters::to_common_args),
            role: host.role.as_str(),
            env_name: host.environment.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GroupHosts {
    hosts: BTreeMap<String, HostVars>,
}

/// Serializable view over an inventory
struct InventoryDocument<'a> {
    inventory: &'a Inventory,
}

impl Serialize for InventoryDocument<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Group::ORDERED.len()))?;
        for group in Group::ORDERED {
            let hosts = self
                .inventory
                .group(group)
                .into_iter()
                .map(|h| (h.name(), HostVars::from(h)))
                .collect();
            map.serialize_entry(group.name(), &GroupHosts { hosts })?;
        }
        map.end()
    }
}

/// Render the YAML body without the header
pub fn render_body(inventory: &Inventory) -> Result<String> {
    serde_yaml::to_string(&InventoryDocument { inventory }).map_err(|e| {
        InventoryError::RenderFailed {
            reason: e.to_string(),
        }
    })
}

/// Render the complete document: header followed by the YAML body
pub fn render(inventory: &Inventory, header: &Header) -> Result<String> {
    let body = render_body(inventory)?;
    Ok(format!("{}{}", header.render(), body))
}
