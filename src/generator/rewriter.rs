use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::read_utf8;

use super::placeholder::PlaceholderSet;

/// What happened to a single file during content rewriting.
#[derive(Debug, PartialEq, Eq)]
pub enum RewriteOutcome {
    Rewritten { path: PathBuf, replacements: usize },
    Unchanged { path: PathBuf },
    /// Not valid UTF-8, left byte-for-byte as copied.
    Binary { path: PathBuf },
}

impl RewriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            RewriteOutcome::Rewritten { path, .. }
            | RewriteOutcome::Unchanged { path }
            | RewriteOutcome::Binary { path } => path,
        }
    }

    /// Gets a message describing the outcome.
    pub fn get_message(&self) -> String {
        match self {
            RewriteOutcome::Rewritten { path, replacements } => {
                format!("Rewrote '{}' ({} replacement(s))", path.display(), replacements)
            }
            RewriteOutcome::Unchanged { path } => {
                format!("Leaving '{}' unchanged (no placeholders)", path.display())
            }
            RewriteOutcome::Binary { path } => {
                format!("Skipping binary or non UTF-8 file '{}'", path.display())
            }
        }
    }
}

/// Per-file results of the rewrite stage.
#[derive(Debug, Default)]
pub struct RewriteReport {
    pub outcomes: Vec<RewriteOutcome>,
    /// `FileReadError` and `FileWriteError` values, one per skipped file.
    pub failures: Vec<Error>,
}

impl RewriteReport {
    pub fn rewritten_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RewriteOutcome::Rewritten { .. }))
            .count()
    }

    pub fn binary_files(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match o {
            RewriteOutcome::Binary { path } => Some(path.as_path()),
            _ => None,
        })
    }

    /// Whether every file could be read and written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Substitutes placeholders in the bodies of every regular file of a tree.
pub struct ContentRewriter<'a> {
    placeholders: &'a PlaceholderSet,
}

impl<'a> ContentRewriter<'a> {
    pub fn new(placeholders: &'a PlaceholderSet) -> Self {
        Self { placeholders }
    }

    /// Rewrites all files below `root`.
    ///
    /// I/O errors are recorded in the report and never stop the walk.
    pub fn rewrite_tree(&self, root: &Path) -> RewriteReport {
        let mut report = RewriteReport::default();

        for dir_entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match dir_entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).display_string();
                    let err = Error::FileReadError { path, e: e.into() };
                    log::error!("{err}");
                    report.failures.push(err);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            match self.rewrite_file(entry.path()) {
                Ok(outcome) => {
                    match outcome {
                        RewriteOutcome::Binary { .. } => log::warn!("{}", outcome.get_message()),
                        RewriteOutcome::Rewritten { .. } => log::info!("{}", outcome.get_message()),
                        RewriteOutcome::Unchanged { .. } => log::debug!("{}", outcome.get_message()),
                    }
                    report.outcomes.push(outcome);
                }
                Err(err) => {
                    log::error!("{err}");
                    report.failures.push(err);
                }
            }
        }

        report
    }

    /// Rewrites a single file in place if any placeholder occurs in it.
    pub fn rewrite_file(&self, path: &Path) -> Result<RewriteOutcome> {
        let path_buf = path.to_path_buf();
        let Some(text) = read_utf8(path)
            .map_err(|e| Error::FileReadError { path: path.display_string(), e })?
        else {
            return Ok(RewriteOutcome::Binary { path: path_buf });
        };

        let (rewritten, replacements) = self.placeholders.apply(&text);
        if replacements == 0 || rewritten == text {
            return Ok(RewriteOutcome::Unchanged { path: path_buf });
        }

        fs::write(path, rewritten.as_bytes())
            .map_err(|e| Error::FileWriteError { path: path.display_string(), e })?;
        Ok(RewriteOutcome::Rewritten { path: path_buf, replacements })
    }
}
