use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::ext::PathExt;

/// Recursively copies `template_root` to `dest_dir`.
///
/// Missing parents of `dest_dir` are created. Symbolic links inside the
/// template are followed and their targets copied. A failure leaves whatever
/// was already copied in place.
///
/// # Returns
/// * `Result<usize>` - Number of files copied
pub fn copy_template(template_root: &Path, dest_dir: &Path) -> Result<usize> {
    let mut copied = 0;

    for dir_entry in WalkDir::new(template_root).follow_links(true).sort_by_file_name() {
        let entry = dir_entry.map_err(|e| {
            let source_path = e.path().unwrap_or(template_root).display_string();
            Error::CopyFailure { source_path, e: e.into() }
        })?;
        let source = entry.path();
        let relative = source
            .strip_prefix(template_root)
            .map_err(|e| Error::Other(e.into()))?;
        let target = dest_dir.join(relative);

        let copy_failure =
            |e: std::io::Error| Error::CopyFailure { source_path: source.display_string(), e };

        if entry.file_type().is_dir() {
            log::debug!("Creating directory '{}'", target.display());
            fs::create_dir_all(&target).map_err(copy_failure)?;
        } else {
            log::debug!("Copying '{}' to '{}'", source.display(), target.display());
            fs::copy(source, &target).map_err(copy_failure)?;
            copied += 1;
        }
    }

    Ok(copied)
}
