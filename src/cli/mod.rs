pub mod args;
pub mod runner;

pub use args::{
    get_cli, get_log_level_from_verbose, BuildArgs, ChangedOpsArgs, Cli, Commands,
    GenerateArgs,
};
pub use runner::run;
