//! Configuration loading and management

use crate::constants::{
    CONFIG_FILENAMES, DEFAULT_DOC_EXTENSIONS, DEFAULT_DOMAINS, DEFAULT_HEADER_GUARD_SUFFIX,
    DEFAULT_TEMPLATE_DIR, DEFAULT_TEMPLATE_TOKEN,
};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::validation::is_snake_token;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Tool settings, every key is optional.
#[derive(Debug, Deserialize)]
pub struct ConfigV1 {
    /// Template tree location, relative paths are resolved against `base_dir`.
    #[serde(default = "get_default_template_dir")]
    pub template_dir: PathBuf,
    /// Placeholder name used throughout the template tree.
    #[serde(default = "get_default_template_token")]
    pub template_token: String,
    #[serde(default = "get_default_header_guard_suffix")]
    pub header_guard_suffix: String,
    /// Top-level directories that hold operators.
    #[serde(default = "get_default_domains")]
    pub domains: Vec<String>,
    /// Changed files with these extensions never select an operator.
    #[serde(default = "get_default_doc_extensions")]
    pub doc_extensions: Vec<String>,
    /// Directory of the config file, or of the executable without one.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        Self {
            template_dir: get_default_template_dir(),
            template_token: get_default_template_token(),
            header_guard_suffix: get_default_header_guard_suffix(),
            domains: get_default_domains(),
            doc_extensions: get_default_doc_extensions(),
            base_dir: PathBuf::new(),
        }
    }
}

impl ConfigV1 {
    pub fn validate(&self) -> Result<()> {
        if !is_snake_token(&self.template_token) {
            return Err(Error::ConfigValidation(format!(
                "template_token '{}' must be non-empty lower snake case",
                self.template_token
            )));
        }
        if self.header_guard_suffix.is_empty() {
            return Err(Error::ConfigValidation(
                "header_guard_suffix must not be empty".into(),
            ));
        }
        if self.domains.iter().all(|domain| domain.trim().is_empty()) {
            return Err(Error::ConfigValidation("domains must not be empty".into()));
        }
        Ok(())
    }

    /// Absolute location of the template tree.
    pub fn template_root(&self) -> PathBuf {
        if self.template_dir.is_absolute() {
            self.template_dir.clone()
        } else {
            self.base_dir.join(&self.template_dir)
        }
    }

    fn with_base_dir(mut self, base_dir: &Path) -> Self {
        self.base_dir = base_dir.to_path_buf();
        self
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum Config {
    #[serde(rename = "v1")]
    V1(ConfigV1),
}

impl Config {
    /// Looks for one of the known config files in `search_root`.
    ///
    /// Falls back to the defaults when none exists.
    pub fn load_config<P: AsRef<Path>>(search_root: P) -> Result<Self> {
        let search_root = search_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = search_root.join(config_file_name);
            if config_file_path.is_file() {
                log::debug!("Loading configuration from '{}'", config_file_path.display());
                return Self::from_file(&config_file_path);
            }
        }

        log::debug!(
            "No configuration file found in '{}', using defaults",
            search_root.display()
        );
        Ok(Config::V1(ConfigV1::default().with_base_dir(search_root)))
    }

    /// Parses an explicit config file; JSON for `.json`, YAML otherwise.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ConfigNotFound { path: path.display_string() });
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let Config::V1(config) = config;
        Ok(Config::V1(config.with_base_dir(base_dir)))
    }
}

/// Loads and validates the configuration.
///
/// `explicit` is the `--config` argument. Without it the directory of the
/// running executable is searched.
pub fn load(explicit: Option<&Path>) -> Result<ConfigV1> {
    let config = match explicit {
        Some(path) => Config::from_file(path)?,
        None => Config::load_config(tool_root()?)?,
    };
    let Config::V1(config) = config;
    config.validate()?;
    Ok(config)
}

/// Directory holding the running executable.
pub fn tool_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        Error::Other(anyhow::anyhow!(
            "Cannot determine the directory of '{}'",
            exe.display()
        ))
    })
}

fn get_default_template_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_DIR)
}

fn get_default_template_token() -> String {
    DEFAULT_TEMPLATE_TOKEN.to_string()
}

fn get_default_header_guard_suffix() -> String {
    DEFAULT_HEADER_GUARD_SUFFIX.to_string()
}

fn get_default_domains() -> Vec<String> {
    DEFAULT_DOMAINS.iter().map(|domain| domain.to_string()).collect()
}

fn get_default_doc_extensions() -> Vec<String> {
    DEFAULT_DOC_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}
