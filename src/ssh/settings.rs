//! SSH access settings and jump parameter construction

use std::path::{Path, PathBuf};

use crate::error::{InventoryError, Result};

use super::{ConnectionParameters, SshStrategy};

pub const DEFAULT_BASTION_USER: &str = "ansible";
pub const DEFAULT_HOST_USER: &str = "root";

/// Resolved SSH settings applied to every generated host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshSettings {
    pub strategy: SshStrategy,
    /// Local private key, referenced only when the strategy uses a key file
    pub key_path: PathBuf,
    /// Login user for direct connections to the bastion
    pub bastion_user: String,
    /// User for the hop through the bastion
    pub jump_user: String,
    /// Login user on frontend and backend hosts
    pub host_user: String,
    /// When false, host key verification is disabled for routed hosts
    pub strict_host_key_checking: bool,
}

impl Default for SshSettings {
    fn default() -> Self {
        Self {
            strategy: SshStrategy::default(),
            key_path: PathBuf::from(super::key::DEFAULT_KEY_PATH),
            bastion_user: DEFAULT_BASTION_USER.to_string(),
            jump_user: DEFAULT_BASTION_USER.to_string(),
            host_user: DEFAULT_HOST_USER.to_string(),
            strict_host_key_checking: false,
        }
    }
}

impl SshSettings {
    /// Key file to reference from host entries, if the strategy uses one
    pub fn key_file(&self) -> Option<&Path> {
        self.strategy
            .uses_key_file()
            .then_some(self.key_path.as_path())
    }

    /// Fail fast when the strategy needs a local key that does not exist
    pub fn verify_key_file(&self) -> Result<()> {
        match self.key_file() {
            Some(path) if !path.exists() => Err(InventoryError::KeyFileMissing {
                path: path.display().to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Parameters routing a connection through the bastion at `bastion_address`
    pub fn jump_parameters(&self, bastion_address: &str) -> ConnectionParameters {
        let jump_target = format!("{}@{}", self.jump_user, bastion_address);

        let params = match self.strategy {
            SshStrategy::AgentForwarding | SshStrategy::KeyFile => {
                ConnectionParameters::new().with("ProxyJump", jump_target)
            }
            SshStrategy::ProxyCommand => {
                ConnectionParameters::new().with("ProxyCommand", self.proxy_command(&jump_target))
            }
        };

        let params = if self.strict_host_key_checking {
            params
        } else {
            params
                .with("StrictHostKeyChecking", "no")
                .with("UserKnownHostsFile", "/dev/null")
        };

        match self.strategy {
            SshStrategy::AgentForwarding => params.with("ForwardAgent", "yes"),
            SshStrategy::KeyFile | SshStrategy::ProxyCommand => {
                params.with("IdentitiesOnly", "yes")
            }
        }
    }

    /// `%h` and `%p` are left for ssh to expand to the target host and port.
    /// ssh runs the command through `/bin/sh` after expanding `%` tokens, so
    /// the key path and jump target are token-escaped and then shell-quoted.
    fn proxy_command(&self, jump_target: &str) -> String {
        let mut command = String::from("ssh -W %h:%p -q");
        if !self.strict_host_key_checking {
            command.push_str(" -o StrictHostKeyChecking=no -o UserKnownHostsFile=/dev/null");
        }
        let key = self.key_path.to_string_lossy();
        command.push_str(" -i ");
        command.push_str(&shell_quote(&escape_percent(&key)));
        command.push(' ');
        command.push_str(&shell_quote(&escape_percent(jump_target)));
        command
    }
}

fn escape_percent(text: &str) -> String {
    text.replace('%', "%%")
}

/// Single-quote `text` unless it only holds characters the shell takes literally
fn shell_quote(text: &str) -> String {
    let literal = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c));
    if literal {
        text.to_string()
    } else {
        format!("'{}'", text.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn settings(strategy: SshStrategy) -> SshSettings {
        SshSettings {
            strategy,
            key_path: PathBuf::from("/home/ops/.ssh/deploy"),
            ..SshSettings::default()
        }
    }

    #[test]
    fn test_agent_forwarding_parameters() {
        let params = settings(SshStrategy::AgentForwarding).jump_parameters("1.2.3.4");
        assert_eq!(
            params.to_common_args(),
            "-o ProxyJump=ansible@1.2.3.4 -o StrictHostKeyChecking=no \
             -o UserKnownHostsFile=/dev/null -o ForwardAgent=yes"
        );
    }

    #[test]
    fn test_key_file_parameters() {
        let params = settings(SshStrategy::KeyFile).jump_parameters("1.2.3.4");
        assert_eq!(params.get("ProxyJump"), Some("ansible@1.2.3.4"));
        assert_eq!(params.get("IdentitiesOnly"), Some("yes"));
        assert_eq!(params.get("ForwardAgent"), None);
    }

    #[test]
    fn test_proxy_command_keeps_placeholders() {
        let mut s = settings(SshStrategy::ProxyCommand);
        s.jump_user = "root".to_string();
        s.strict_host_key_checking = true;
        let params = s.jump_parameters("1.2.3.4");
        assert_eq!(
            params.get("ProxyCommand"),
            Some("ssh -W %h:%p -q -i /home/ops/.ssh/deploy root@1.2.3.4")
        );
        assert_eq!(params.get("ProxyJump"), None);
    }

    #[test]
    fn test_proxy_command_quotes_key_with_spaces() {
        let mut s = settings(SshStrategy::ProxyCommand);
        s.key_path = PathBuf::from("/keys/my key");
        s.strict_host_key_checking = true;
        let params = s.jump_parameters("1.2.3.4");
        assert_eq!(
            params.get("ProxyCommand"),
            Some("ssh -W %h:%p -q -i '/keys/my key' ansible@1.2.3.4")
        );
    }

    #[test]
    fn test_proxy_command_escapes_percent_tokens() {
        let mut s = settings(SshStrategy::ProxyCommand);
        s.key_path = PathBuf::from("/keys/de%ploy");
        s.strict_host_key_checking = true;
        assert_eq!(
            s.jump_parameters("1.2.3.4").get("ProxyCommand"),
            Some("ssh -W %h:%p -q -i /keys/de%%ploy ansible@1.2.3.4")
        );
    }

    #[test]
    fn test_proxy_command_quotes_shell_metacharacters() {
        let mut s = settings(SshStrategy::ProxyCommand);
        s.key_path = PathBuf::from("/keys/o'brien");
        s.jump_user = "op$x".to_string();
        s.strict_host_key_checking = true;
        assert_eq!(
            s.jump_parameters("1.2.3.4").get("ProxyCommand"),
            Some(r"ssh -W %h:%p -q -i '/keys/o'\''brien' 'op$x@1.2.3.4'")
        );
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("ansible@10.0.0.1"), "ansible@10.0.0.1");
        assert_eq!(shell_quote("a;b"), "'a;b'");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("~/key"), "'~/key'");
    }

    #[test]
    fn test_strict_host_key_checking_toggle() {
        let mut s = settings(SshStrategy::AgentForwarding);
        s.strict_host_key_checking = true;
        let params = s.jump_parameters("1.2.3.4");
        assert_eq!(params.get("StrictHostKeyChecking"), None);
        assert_eq!(params.get("UserKnownHostsFile"), None);
    }

    #[test]
    fn test_jump_user_is_used() {
        let mut s = settings(SshStrategy::AgentForwarding);
        s.jump_user = "jump".to_string();
        assert_eq!(
            s.jump_parameters("bastion.example.com").get("ProxyJump"),
            Some("jump@bastion.example.com")
        );
    }

    #[test]
    fn test_agent_forwarding_has_no_key_file() {
        let s = settings(SshStrategy::AgentForwarding);
        assert!(s.key_file().is_none());
        assert!(s.verify_key_file().is_ok());
    }

    #[test]
    fn test_verify_missing_key_file() {
        let mut s = settings(SshStrategy::KeyFile);
        s.key_path = PathBuf::from("/nonexistent/bastion-inventory/key");
        let err = s.verify_key_file().unwrap_err();
        assert!(matches!(err, InventoryError::KeyFileMissing { .. }));
    }

    #[test]
    fn test_verify_existing_key_file() {
        let key = NamedTempFile::new().unwrap();
        let mut s = settings(SshStrategy::ProxyCommand);
        s.key_path = key.path().to_path_buf();
        assert!(s.verify_key_file().is_ok());
        assert_eq!(s.key_file(), Some(key.path()));
    }
}
