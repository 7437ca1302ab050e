use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ioutils::absolutize;

/// What to generate and where.
///
/// Constructed once from caller input and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    category: String,
    name: String,
    output_path: PathBuf,
}

impl GenerationRequest {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            output_path: output_path.into(),
        }
    }

    /// Operator category, e.g. `math`.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Operator name, e.g. `asinh`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Absolute `<output_path>/<category>/<name>` directory.
    pub fn dest_dir(&self) -> Result<PathBuf> {
        Ok(absolutize(&self.output_path)?.join(&self.category).join(&self.name))
    }
}
