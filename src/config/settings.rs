//! Final generator settings
//!
//! Precedence for each setting: command-line flag, then configuration file, then
//! built-in default. The key path additionally consults environment variables
//! (see [`crate::ssh::key`]).

use std::path::PathBuf;

use crate::error::{InventoryError, Result};
use crate::ssh::SshSettings;
use crate::ssh::key::resolve_key_path;
use crate::ssh::settings::{DEFAULT_BASTION_USER, DEFAULT_HOST_USER};

use super::ConfigFile;

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub strategy: Option<crate::ssh::SshStrategy>,
    pub key_path: Option<PathBuf>,
    pub bastion_user: Option<String>,
    pub jump_user: Option<String>,
    pub host_user: Option<String>,
    /// Flags can only switch these on
    pub strict_host_key_checking: bool,
    pub skip_unrouted: bool,
}

/// Settings the inventory builder runs with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub ssh: SshSettings,
    /// Omit frontend/backend hosts of environments without a known bastion
    pub skip_unrouted: bool,
}

impl GeneratorSettings {
    /// Resolve settings using the process environment
    pub fn resolve(overrides: &Overrides, file: &ConfigFile) -> Result<Self> {
        Self::resolve_with_env(overrides, file, |name| std::env::var(name).ok())
    }

    /// Resolve settings with an explicit environment lookup
    pub fn resolve_with_env<F>(overrides: &Overrides, file: &ConfigFile, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ssh_file = &file.ssh;

        let strategy = overrides
            .strategy
            .or(ssh_file.strategy)
            .unwrap_or_default();

        let key_path = resolve_key_path(
            overrides.key_path.as_deref(),
            ssh_file.key_path.as_deref(),
            env,
        );

        let bastion_user = pick_user(
            "bastion_user",
            overrides.bastion_user.as_ref(),
            ssh_file.bastion_user.as_ref(),
        )?
        .unwrap_or_else(|| DEFAULT_BASTION_USER.to_string());

        let jump_user = pick_user(
            "jump_user",
            overrides.jump_user.as_ref(),
            ssh_file.jump_user.as_ref(),
        )?
        .unwrap_or_else(|| bastion_user.clone());

        let host_user = pick_user(
            "host_user",
            overrides.host_user.as_ref(),
            ssh_file.host_user.as_ref(),
        )?
        .unwrap_or_else(|| DEFAULT_HOST_USER.to_string());

        let strict_host_key_checking = overrides.strict_host_key_checking
            || ssh_file.strict_host_key_checking.unwrap_or(false);

        let skip_unrouted = overrides.skip_unrouted || file.skip_unrouted.unwrap_or(false);

        Ok(Self {
            ssh: SshSettings {
                strategy,
                key_path,
                bastion_user,
                jump_user,
                host_user,
                strict_host_key_checking,
            },
            skip_unrouted,
        })
    }
}

fn pick_user(
    field: &str,
    flag: Option<&String>,
    file: Option<&String>,
) -> Result<Option<String>> {
    match flag.or(file) {
        Some(user) if user.trim().is_empty() || user.chars().any(char::is_whitespace) => {
            Err(InventoryError::ConfigInvalid {
                message: format!("{field} must be a non-empty user name without spaces"),
            })
        }
        Some(user) => Ok(Some(user.clone())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssh::SshStrategy;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let settings =
            GeneratorSettings::resolve_with_env(&Overrides::default(), &ConfigFile::default(), no_env)
                .unwrap();
        assert_eq!(settings.ssh.strategy, SshStrategy::AgentForwarding);
        assert_eq!(settings.ssh.bastion_user, "ansible");
        assert_eq!(settings.ssh.jump_user, "ansible");
        assert_eq!(settings.ssh.host_user, "root");
        assert!(!settings.ssh.strict_host_key_checking);
        assert!(!settings.skip_unrouted);
    }

    #[test]
    fn test_jump_user_follows_bastion_user() {
        let overrides = Overrides {
            bastion_user: Some("ops".to_string()),
            ..Overrides::default()
        };
        let settings =
            GeneratorSettings::resolve_with_env(&overrides, &ConfigFile::default(), no_env)
                .unwrap();
        assert_eq!(settings.ssh.jump_user, "ops");
    }

    #[test]
    fn test_flag_overrides_file() {
        let file = ConfigFile::from_yaml(
            "ssh:\n  strategy: key-file\n  host_user: ubuntu\n  jump_user: root\n",
        )
        .unwrap();
        let overrides = Overrides {
            strategy: Some(SshStrategy::ProxyCommand),
            ..Overrides::default()
        };
        let settings = GeneratorSettings::resolve_with_env(&overrides, &file, no_env).unwrap();
        assert_eq!(settings.ssh.strategy, SshStrategy::ProxyCommand);
        assert_eq!(settings.ssh.host_user, "ubuntu");
        assert_eq!(settings.ssh.jump_user, "root");
    }

    #[test]
    fn test_toggles_from_file() {
        let file =
            ConfigFile::from_yaml("ssh:\n  strict_host_key_checking: true\nskip_unrouted: true\n")
                .unwrap();
        let settings =
            GeneratorSettings::resolve_with_env(&Overrides::default(), &file, no_env).unwrap();
        assert!(settings.ssh.strict_host_key_checking);
        assert!(settings.skip_unrouted);
    }

    #[test]
    fn test_key_path_from_env() {
        let file = ConfigFile::from_yaml("ssh:\n  key_path: /config/key\n").unwrap();
        let settings = GeneratorSettings::resolve_with_env(&Overrides::default(), &file, |name| {
            (name == "ANSIBLE_SSH_KEY_PATH").then(|| "/env/key".to_string())
        })
        .unwrap();
        assert_eq!(settings.ssh.key_path, PathBuf::from("/env/key"));
    }

    #[test]
    fn test_empty_user_rejected() {
        let overrides = Overrides {
            host_user: Some(String::new()),
            ..Overrides::default()
        };
        let err = GeneratorSettings::resolve_with_env(&overrides, &ConfigFile::default(), no_env)
            .unwrap_err();
        assert!(matches!(err, InventoryError::ConfigInvalid { .. }));
        assert!(err.to_string().contains("host_user"));
    }
}
