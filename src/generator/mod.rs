//! Operator project generation pipeline
//!
//! The pipeline runs four stages strictly in order, each one completing
//! before the next starts:
//! - validation of the request (`crate::validation`)
//! - `copier`: copies the template tree to the destination
//! - `renamer`: replaces the token in entry names, bottom-up
//! - `rewriter`: replaces the token variants in file contents
//!
//! The first three stages are all-or-nothing. The rewriter tolerates per-file
//! failures and reports them in its `RewriteReport`.

pub mod copier;
pub mod placeholder;
pub mod renamer;
pub mod request;
pub mod rewriter;

pub use placeholder::{Placeholder, PlaceholderKind, PlaceholderSet};
pub use request::GenerationRequest;
pub use rewriter::{RewriteOutcome, RewriteReport};

use std::path::{Path, PathBuf};

use crate::config::ConfigV1;
use crate::error::Result;
use crate::validation::validate_request;
use copier::copy_template;
use renamer::PathRenamer;
use rewriter::ContentRewriter;

/// Result of a completed generation.
#[derive(Debug)]
pub struct GenerationReport {
    pub category: String,
    pub name: String,
    pub dest_dir: PathBuf,
    pub copied_files: usize,
    pub renamed_entries: usize,
    pub rewrite: RewriteReport,
}

impl GenerationReport {
    /// Human readable summary printed once generation is finished.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Successfully created operator project for {}/{}!\nProject path: {}",
            self.category,
            self.name,
            self.dest_dir.display()
        );
        let binaries: Vec<&Path> = self.rewrite.binary_files().collect();
        if !binaries.is_empty() {
            summary.push_str(&format!(
                "\nNote: {} file(s) left unchanged (binary):",
                binaries.len()
            ));
            for path in binaries {
                summary.push_str(&format!("\n  - {}", path.display()));
            }
        }
        if !self.rewrite.is_complete() {
            summary.push_str(&format!(
                "\nWarning: {} file(s) could not be processed and were left as copied:",
                self.rewrite.failures.len()
            ));
            for failure in &self.rewrite.failures {
                summary.push_str(&format!("\n  - {failure}"));
            }
        }
        summary
    }
}

/// Runs the generation pipeline for one request.
pub struct Generator<'a> {
    request: &'a GenerationRequest,
    template_root: PathBuf,
    template_token: &'a str,
    header_guard_suffix: &'a str,
}

impl<'a> Generator<'a> {
    pub fn new(request: &'a GenerationRequest, config: &'a ConfigV1) -> Self {
        Self {
            request,
            template_root: config.template_root(),
            template_token: &config.template_token,
            header_guard_suffix: &config.header_guard_suffix,
        }
    }

    /// Uses `template_root` instead of the configured template.
    pub fn with_template_root(mut self, template_root: impl Into<PathBuf>) -> Self {
        self.template_root = template_root.into();
        self
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    /// Executes validation, copy, rename and rewrite.
    ///
    /// Returns the first fatal error. Per-file rewrite failures end up in
    /// `GenerationReport::rewrite` instead.
    pub fn run(&self) -> Result<GenerationReport> {
        let dest_dir = validate_request(self.request, &self.template_root)?;
        let placeholders = PlaceholderSet::new(
            self.template_token,
            self.request.name(),
            self.header_guard_suffix,
        )?;

        log::info!(
            "Creating operator project in '{}' from template '{}'",
            dest_dir.display(),
            self.template_root.display()
        );
        let copied_files = copy_template(&self.template_root, &dest_dir)?;
        log::debug!("Copied {copied_files} file(s)");

        let renamed_entries = PathRenamer::new(self.template_token, self.request.name())
            .rename_tree(&dest_dir)?;
        log::debug!("Renamed {renamed_entries} path(s)");

        let rewrite = ContentRewriter::new(&placeholders).rewrite_tree(&dest_dir);
        log::debug!("Rewrote {} file(s)", rewrite.rewritten_count());

        Ok(GenerationReport {
            category: self.request.category().to_string(),
            name: self.request.name().to_string(),
            dest_dir,
            copied_files,
            renamed_entries,
            rewrite,
        })
    }
}
