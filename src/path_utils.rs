//! Path utilities for bastion-inventory

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
///
/// Paths without a leading `~`, or with `~user` forms, are returned unchanged.
/// If the home directory cannot be determined the path is returned as is.
///
/// # Examples
///
/// ```ignore
/// let key = expand_home(Path::new("~/.ssh/id_ed25519"));
/// assert!(key.is_absolute());
/// ```
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Render a path for generated files.
///
/// On Windows separators become forward slashes; elsewhere a backslash is an
/// ordinary file name character and is kept.
pub fn to_inventory_path(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    if cfg!(windows) {
        rendered.replace('\\', "/")
    } else {
        rendered.into_owned()
    }
}
