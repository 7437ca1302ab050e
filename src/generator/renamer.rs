use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::entry_exists;

/// Replaces the template token in file and directory names.
pub struct PathRenamer<'a> {
    token: &'a str,
    name: &'a str,
}

impl<'a> PathRenamer<'a> {
    pub fn new(token: &'a str, name: &'a str) -> Self {
        Self { token, name }
    }

    /// Renames every entry below `root`; `root` itself keeps its name.
    ///
    /// The walk is post-order: the content of a directory is renamed while
    /// the directory still has its template name, then the directory itself.
    ///
    /// # Returns
    /// * `Result<usize>` - Number of renamed entries
    pub fn rename_tree(&self, root: &Path) -> Result<usize> {
        let mut renamed = 0;
        self.visit(root, &mut renamed)?;
        Ok(renamed)
    }

    fn visit(&self, dir: &Path, renamed: &mut usize) -> Result<()> {
        let walk_error = |e: io::Error| Error::WalkError { path: dir.display_string(), e };

        let mut entries = fs::read_dir(dir)
            .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
            .map_err(walk_error)?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            if entry.file_type().map_err(walk_error)?.is_dir() {
                self.visit(&path, renamed)?;
            }
            if self.rename_entry(&path)? {
                *renamed += 1;
            }
        }
        Ok(())
    }

    /// The new path of `path`, or `None` when its name keeps unchanged.
    pub fn renamed_path(&self, path: &Path) -> Option<PathBuf> {
        let file_name = path.file_name_str()?;
        if !file_name.contains(self.token) {
            return None;
        }
        let new_name = file_name.replace(self.token, self.name);
        (new_name != file_name).then(|| path.with_file_name(new_name))
    }

    fn rename_entry(&self, path: &Path) -> Result<bool> {
        let Some(target) = self.renamed_path(path) else {
            return Ok(false);
        };

        let rename_failure = |e: io::Error| Error::RenameFailure {
            from: path.display_string(),
            to: target.display_string(),
            e,
        };

        if entry_exists(&target) {
            return Err(rename_failure(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "target already exists",
            )));
        }

        fs::rename(path, &target).map_err(rename_failure)?;
        log::info!("Renamed '{}' to '{}'", path.display(), target.display());
        Ok(true)
    }
}
