//! Constants used throughout the opgen application

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["opgen.json", "opgen.yaml", "opgen.yml"];

/// Template directory, relative to the tool location
pub const DEFAULT_TEMPLATE_DIR: &str = "template/add";

/// Placeholder name embedded in the template tree
pub const DEFAULT_TEMPLATE_TOKEN: &str = "add_example";

/// Suffix appended to the upper-case form to build include guards
pub const DEFAULT_HEADER_GUARD_SUFFIX: &str = "_H";

/// Top-level directories that hold operators
pub const DEFAULT_DOMAINS: &[&str] = &["math", "conversion"];

/// Extensions of changed files that never trigger an operator run
pub const DEFAULT_DOC_EXTENSIONS: &[&str] = &[".md"];

/// Default target of the `build` command
pub const DEFAULT_BUILD_TARGET: &str = "all";

/// Separator of the changed operator list
pub const OPERATOR_LIST_SEPARATOR: &str = ";";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
