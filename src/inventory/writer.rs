//! Atomic output writing
//!
//! The rendered document is written to a temporary file next to the destination
//! and renamed over it, so a failure never leaves a half-written inventory and an
//! existing file is untouched until the new one is complete.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{InventoryError, Result};

/// Write `contents` to `path`, creating parent directories as needed
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_failed = |reason: String| InventoryError::FileWriteFailed {
        path: path.display().to_string(),
        reason,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| write_failed(e.to_string()))?;
    temp.write_all(contents.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| write_failed(e.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| write_failed(e.to_string()))?;
    }

    temp.persist(path)
        .map_err(|e| write_failed(e.error.to_string()))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "inventory written");
    Ok(())
}
