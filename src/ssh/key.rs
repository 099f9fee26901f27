//! Private key path resolution

use std::path::{Path, PathBuf};

use crate::path_utils::expand_home;

pub const DEFAULT_KEY_PATH: &str = "~/.ssh/digitalocean";

/// Environment variable overriding the default key path
pub const KEY_PATH_ENV: &str = "ANSIBLE_SSH_KEY_PATH";

/// Deprecated alias of [`KEY_PATH_ENV`], consulted only when it is unset
pub const LEGACY_KEY_PATH_ENV: &str = "DO_SSH_KEY_PATH";

/// Resolve the key path.
///
/// Precedence: explicit flag, `ANSIBLE_SSH_KEY_PATH`, `DO_SSH_KEY_PATH`,
/// config file, built-in default. Empty environment values count as unset.
/// A leading `~` is expanded to the home directory.
pub fn resolve_key_path<F>(flag: Option<&Path>, config: Option<&Path>, env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    let path = if let Some(flag) = flag {
        flag.to_path_buf()
    } else if let Some(value) = non_empty(KEY_PATH_ENV) {
        PathBuf::from(value)
    } else if let Some(value) = non_empty(LEGACY_KEY_PATH_ENV) {
        tracing::warn!(
            "{LEGACY_KEY_PATH_ENV} is deprecated and will be removed, use {KEY_PATH_ENV} instead"
        );
        PathBuf::from(value)
    } else if let Some(config) = config {
        config.to_path_buf()
    } else {
        PathBuf::from(DEFAULT_KEY_PATH)
    };

    expand_home(&path)
}
