//! Append-mode log files, with `~` expansion and missing parent directories created on open.

use crate::internal;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Expands a leading `~` so config files can say `~/logs/app.log`.
#[must_use]
pub fn resolve_path(path: &str) -> PathBuf {
    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}

/// Opens `path` for appending, creating it and its parent directories as needed.
///
/// Append mode keeps each record's single `write_all` contiguous even when
/// other processes append to the same file.
///
/// # Errors
/// I/O errors from directory creation or opening the file.
pub fn open_append(path: &Path) -> Result<File, crate::Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        match fs::create_dir_all(parent) {
            Ok(()) => {
                internal::debug("FILE", &format!("Created directory: {}", parent.display()));
            }
            Err(e) => {
                internal::error(
                    "FILE",
                    &format!("Failed to create directory {}: {}", parent.display(), e),
                );
                return Err(e.into());
            }
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    internal::debug("FILE", &format!("Opened log file: {}", path.display()));
    Ok(file)
}
