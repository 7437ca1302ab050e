use crate::build::BuildRequest;
use crate::constants::{exit_codes, verbosity, DEFAULT_BUILD_TARGET};
use crate::generator::GenerationRequest;
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// opgen - operator project development assistant.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Use 'opgen <COMMAND> --help' for help on a specific command."
)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to opgen.{json,yaml,yml} next to the executable).
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an operator project skeleton from the template.
    #[command(visible_alias = "opgen")]
    Generate(GenerateArgs),

    /// Build an operator project (simulated).
    Build(BuildArgs),

    /// Print the operators touched by a change list, separated by ';'.
    #[command(name = "changed-ops")]
    ChangedOps(ChangedOpsArgs),
}

impl Commands {
    /// Name of the subcommand as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Generate(_) => "generate",
            Commands::Build(_) => "build",
            Commands::ChangedOps(_) => "changed-ops",
        }
    }
}

/// Arguments for the generate command.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Operator category, e.g. math.
    #[arg(short = 't', long, alias = "op_type", value_name = "CATEGORY")]
    pub category: String,

    /// Name of the new operator, e.g. asinh.
    #[arg(short, long, alias = "op_name", value_name = "NAME")]
    pub name: String,

    /// Root directory of the generated project.
    #[arg(short = 'p', long, alias = "output_path", default_value = ".")]
    pub output_path: PathBuf,

    /// Template directory overriding the configured one.
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

impl From<&GenerateArgs> for GenerationRequest {
    fn from(args: &GenerateArgs) -> Self {
        GenerationRequest::new(&args.category, &args.name, &args.output_path)
    }
}

/// Arguments for the build command.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Build target, e.g. ut or package.
    #[arg(long, default_value = DEFAULT_BUILD_TARGET)]
    pub target: String,

    /// Clean before building.
    #[arg(long)]
    pub clean: bool,
}

impl From<&BuildArgs> for BuildRequest {
    fn from(args: &BuildArgs) -> Self {
        BuildRequest { target: args.target.clone(), clean: args.clean }
    }
}

/// Arguments for the changed-ops command.
#[derive(Args, Debug, Clone)]
pub struct ChangedOpsArgs {
    /// File listing one changed path per line.
    #[arg(value_name = "FILE")]
    pub change_file: PathBuf,
}

/// Parse command line arguments; a missing subcommand prints help to stderr and exits with 1.
pub fn get_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            eprintln!("{}", command.render_help());
            std::process::exit(exit_codes::FAILURE);
        }
        _ => e.exit(),
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_generate_with_defaults() {
        let cli = Cli::parse_from(["opgen", "generate", "--category", "math", "--name", "asinh"]);
        let Commands::Generate(args) = cli.command else {
            panic!("Expected generate command");
        };
        assert_eq!(args.category, "math");
        assert_eq!(args.name, "asinh");
        assert_eq!(args.output_path, PathBuf::from("."));
        assert_eq!(args.template_dir, None);
    }

    #[test]
    fn parses_short_and_legacy_flags() {
        let cli = Cli::parse_from(["opgen", "opgen", "-t", "math", "-n", "cosh", "-p", "/tmp/ops"]);
        let Commands::Generate(args) = cli.command else {
            panic!("Expected generate command");
        };
        assert_eq!(args.output_path, PathBuf::from("/tmp/ops"));

        let cli = Cli::parse_from([
            "opgen",
            "generate",
            "--op_type",
            "conversion",
            "--op_name",
            "cast",
            "--output_path",
            "out",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("Expected generate command");
        };
        let request = GenerationRequest::from(&args);
        assert_eq!(request.category(), "conversion");
        assert_eq!(request.name(), "cast");
        assert_eq!(request.output_path(), PathBuf::from("out"));
    }

    #[test]
    fn parses_build_flags() {
        let cli = Cli::parse_from(["opgen", "-vv", "build", "--clean"]);
        assert_eq!(cli.verbose, 2);
        let Commands::Build(args) = &cli.command else {
            panic!("Expected build command");
        };
        assert_eq!(
            BuildRequest::from(args),
            BuildRequest { target: "all".into(), clean: true }
        );
        assert_eq!(cli.command.name(), "build");
    }

    #[test]
    fn parses_changed_ops_with_global_config() {
        let cli = Cli::parse_from(["opgen", "changed-ops", "/or_filelist.txt", "--config", "ci.yaml"]);
        assert_eq!(cli.config, Some(PathBuf::from("ci.yaml")));
        let Commands::ChangedOps(args) = cli.command else {
            panic!("Expected changed-ops command");
        };
        assert_eq!(args.change_file, PathBuf::from("/or_filelist.txt"));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        let err = Cli::try_parse_from(["opgen"]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ));
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
