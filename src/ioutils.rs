use std::path::{Path, PathBuf};

use crate::error::Result;

/// Resolves `path` against the current working directory when it is relative.
pub fn absolutize<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

/// Whether anything (file, directory or dangling symlink) occupies `path`.
pub fn entry_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().symlink_metadata().is_ok()
}

/// Reads a file and decodes it as UTF-8.
///
/// Returns `Ok(None)` when the bytes are not valid UTF-8, which callers treat
/// as a binary file.
pub fn read_utf8<P: AsRef<Path>>(path: P) -> std::io::Result<Option<String>> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8(bytes).ok())
}
