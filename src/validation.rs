//! Input validation performed before any filesystem mutation.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::generator::GenerationRequest;
use crate::ioutils::entry_exists;

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_]+$").expect("identifier pattern is a valid regex")
    })
}

fn snake_token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z0-9_]+$").expect("token pattern is a valid regex")
    })
}

/// Whether `value` consists only of ASCII letters, digits and underscores.
pub fn is_identifier(value: &str) -> bool {
    identifier_pattern().is_match(value)
}

/// Whether `value` is a lower snake case template token.
pub fn is_snake_token(value: &str) -> bool {
    snake_token_pattern().is_match(value)
}

/// Checks a single identifier, `label` names it in the error message.
pub fn validate_identifier(label: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{label} must not be empty")));
    }
    if !is_identifier(value) {
        return Err(Error::InvalidArgument(format!(
            "{label} '{value}' contains invalid characters, only letters, digits and underscores are allowed"
        )));
    }
    Ok(())
}

/// Validates a generation request against the filesystem.
///
/// Checks, in order, the identifiers, the absence of the destination and the
/// presence of the template. Nothing on disk is touched.
///
/// # Returns
/// * `Result<PathBuf>` - The absolute destination directory
pub fn validate_request(
    request: &GenerationRequest,
    template_root: &Path,
) -> Result<PathBuf> {
    validate_identifier("category", request.category())?;
    validate_identifier("operator name", request.name())?;

    let dest_dir = request.dest_dir()?;
    if entry_exists(&dest_dir) {
        return Err(Error::DestinationExists { dest_dir: dest_dir.display_string() });
    }

    if !template_root.is_dir() {
        return Err(Error::TemplateMissing {
            template_dir: template_root.display_string(),
        });
    }

    Ok(dest_dir)
}
