use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Category or operator name is empty or contains disallowed characters.
    #[error("Invalid argument: {0}.")]
    InvalidArgument(String),

    #[error("Cannot proceed: destination directory '{dest_dir}' already exists.")]
    DestinationExists { dest_dir: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateMissing { template_dir: String },

    #[error("Failed to copy template entry '{source_path}'. Original error: {e}")]
    CopyFailure {
        source_path: String,
        #[source]
        e: std::io::Error,
    },

    #[error("Failed to rename '{from}' to '{to}'. Original error: {e}")]
    RenameFailure {
        from: String,
        to: String,
        #[source]
        e: std::io::Error,
    },

    #[error("Failed to traverse '{path}'. Original error: {e}")]
    WalkError {
        path: String,
        #[source]
        e: std::io::Error,
    },

    /// Non-fatal: reported per file by the content rewriter.
    #[error("Failed to read '{path}'. Original error: {e}")]
    FileReadError {
        path: String,
        #[source]
        e: std::io::Error,
    },

    /// Non-fatal: reported per file by the content rewriter.
    #[error("Failed to write '{path}'. Original error: {e}")]
    FileWriteError {
        path: String,
        #[source]
        e: std::io::Error,
    },

    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Configuration file '{path}' does not exist.")]
    ConfigNotFound { path: String },

    #[error("Invalid configuration: {0}.")]
    ConfigValidation(String),

    #[error("Failed to parse JSON configuration. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML configuration. Original error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Whether the error aborts the generation pipeline.
    ///
    /// Only per-file content rewrite failures are tolerated; everything else
    /// stops the run before the next stage starts.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::FileReadError { .. } | Error::FileWriteError { .. })
    }
}

/// Convenience type alias for Results with opgen's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
