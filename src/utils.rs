use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Create (or truncate) a file for writing.
pub(crate) fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Unable to create file {}", path.display()))
}

/// Open an existing file for reading.
pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Unable to open file {}", path.display()))
}

/// Open an existing file for appending.
pub(crate) fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .append(true)
        .open(path)
        .with_context(|| format!("Unable to open file {} for appending", path.display()))
}

/// Create the parent directory of `path` if it has one and it does not exist.
pub(crate) fn make_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("Unable to create directory {}", parent.display())),
        _ => Ok(()),
    }
}

/// Delete a file.
pub(crate) fn remove(path: &Path) -> Result<()> {
    std::fs::remove_file(path)
        .with_context(|| format!("Unable to remove file {}", path.display()))
}

/// Basically move a file. Renames `from` -> `to`, replacing `to` if it exists.
pub(crate) fn rename(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
    std::fs::rename(from.as_ref(), to.as_ref()).with_context(|| {
        format!(
            "Unable to move file from '{}' to '{}'",
            from.as_ref().to_string_lossy(),
            to.as_ref().to_string_lossy()
        )
    })
}
