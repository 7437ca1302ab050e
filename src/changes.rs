//! Changed operator detection from a list of changed files.
//!
//! The input is one path per line, as written by `git diff --name-only`.
//! A path selects an operator when its first segment is one of the known
//! domains; the operator is the second segment.

use indexmap::IndexMap;
use std::fmt;
use std::path::Path;

use crate::config::ConfigV1;
use crate::constants::OPERATOR_LIST_SEPARATOR;
use crate::error::Result;

/// Operators touched by a change list, in first-seen order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChangedOperators {
    files: IndexMap<String, Vec<String>>,
}

impl ChangedOperators {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Changed files that selected `operator`.
    pub fn files_for(&self, operator: &str) -> &[String] {
        self.files.get(operator).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Operator names joined with `;`.
    pub fn joined(&self) -> String {
        self.names().collect::<Vec<_>>().join(OPERATOR_LIST_SEPARATOR)
    }

    fn record(&mut self, operator: &str, file: &str) {
        self.files.entry(operator.to_string()).or_default().push(file.to_string());
    }
}

impl fmt::Display for ChangedOperators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "changed ops info")?;
        for (operator, files) in &self.files {
            writeln!(f, "  {operator}:")?;
            for file in files {
                writeln!(f, "    {file}")?;
            }
        }
        Ok(())
    }
}

/// Extracts operator names from change lists.
pub struct ChangeListExtractor<'a> {
    domains: &'a [String],
    doc_extensions: &'a [String],
}

impl<'a> ChangeListExtractor<'a> {
    pub fn new(domains: &'a [String], doc_extensions: &'a [String]) -> Self {
        Self { domains, doc_extensions }
    }

    pub fn from_config(config: &'a ConfigV1) -> Self {
        Self::new(&config.domains, &config.doc_extensions)
    }

    /// Reads the change list at `path`.
    ///
    /// # Returns
    /// * `Ok(None)` - The file does not exist; callers run every operator
    /// * `Ok(Some(_))` - The operators found, possibly none
    pub fn extract(&self, path: &Path) -> Result<Option<ChangedOperators>> {
        if !path.exists() {
            log::error!(
                "Change file '{}' does not exist, cannot get file change info",
                path.display()
            );
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(Some(self.extract_from_str(&contents)))
    }

    pub fn extract_from_str(&self, contents: &str) -> ChangedOperators {
        let mut changed = ChangedOperators::default();
        for line in contents.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if self.is_doc_file(line) {
                log::trace!("Skipping documentation change '{line}'");
                continue;
            }
            if let Some(operator) = self.operator_name(line) {
                changed.record(operator, line);
            }
        }
        changed
    }

    /// The operator a changed path belongs to, if any.
    pub fn operator_name<'l>(&self, file_path: &'l str) -> Option<&'l str> {
        let mut segments = file_path.trim_start_matches('/').split('/');
        let domain = segments.next()?;
        let operator = segments.next()?;
        if operator.is_empty() || !self.domains.iter().any(|known| known == domain) {
            return None;
        }
        Some(operator)
    }

    fn is_doc_file(&self, file_path: &str) -> bool {
        let Some(extension) = Path::new(file_path).extension().and_then(|ext| ext.to_str())
        else {
            return false;
        };
        self.doc_extensions
            .iter()
            .any(|doc| doc.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}
