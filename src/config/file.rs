//! Optional YAML configuration file
//!
//! ```yaml
//! ssh:
//!   strategy: agent-forwarding
//!   key_path: ~/.ssh/digitalocean
//!   bastion_user: ansible
//!   jump_user: ansible
//!   host_user: root
//!   strict_host_key_checking: false
//! skip_unrouted: false
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{InventoryError, Result};
use crate::ssh::SshStrategy;

/// Configuration file contents; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub ssh: SshConfig,

    /// Omit frontend/backend hosts whose environment has no bastion
    #[serde(default)]
    pub skip_unrouted: Option<bool>,
}

/// `ssh:` section of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SshConfig {
    #[serde(default)]
    pub strategy: Option<SshStrategy>,
    #[serde(default)]
    pub key_path: Option<PathBuf>,
    #[serde(default)]
    pub bastion_user: Option<String>,
    #[serde(default)]
    pub jump_user: Option<String>,
    #[serde(default)]
    pub host_user: Option<String>,
    #[serde(default)]
    pub strict_host_key_checking: Option<bool>,
}

impl ConfigFile {
    /// Parse configuration from a YAML string. An empty document yields defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let path_str = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => InventoryError::ConfigNotFound {
                path: path_str.clone(),
            },
            _ => InventoryError::ConfigParseFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            },
        })?;

        tracing::debug!(path = %path_str, "loading configuration file");

        Self::from_yaml(&content).map_err(|e| match e {
            InventoryError::ConfigParseFailed { reason, .. } => InventoryError::ConfigParseFailed {
                path: path_str,
                reason,
            },
            other => other,
        })
    }
}
