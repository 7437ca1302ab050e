use crate::{
    build::{run_build, BuildRequest},
    changes::ChangeListExtractor,
    cli::{ChangedOpsArgs, Cli, Commands, GenerateArgs},
    config::{self, ConfigV1},
    error::Result,
    generator::{GenerationReport, GenerationRequest, Generator},
};
use std::path::Path;

/// Dispatches the parsed command line to its handler.
pub fn run(cli: Cli) -> Result<()> {
    log::debug!("Running command '{}'", cli.command.name());
    let config_path = cli.config.as_deref();

    match &cli.command {
        Commands::Generate(args) => run_generate(args, &config::load(config_path)?).map(|_| ()),
        Commands::Build(args) => run_build(&BuildRequest::from(args)),
        Commands::ChangedOps(args) => run_changed_ops(args, &config::load(config_path)?),
    }
}

/// Generates an operator project and prints the summary.
pub fn run_generate(args: &GenerateArgs, config: &ConfigV1) -> Result<GenerationReport> {
    let request = GenerationRequest::from(args);
    let mut generator = Generator::new(&request, config);
    if let Some(template_dir) = &args.template_dir {
        generator = generator.with_template_root(template_dir);
    }

    println!("Creating operator project {}/{}...", request.category(), request.name());
    let report = generator.run()?;
    println!("{}", report.summary());
    Ok(report)
}

/// Prints the changed operators, or nothing when the change file is missing.
pub fn run_changed_ops(args: &ChangedOpsArgs, config: &ConfigV1) -> Result<()> {
    match changed_ops(&args.change_file, config)? {
        Some(joined) => println!("{joined}"),
        None => log::warn!("No operator change info found, run all operators"),
    }
    Ok(())
}

/// The `;`-joined operator list for `change_file`.
pub fn changed_ops(change_file: &Path, config: &ConfigV1) -> Result<Option<String>> {
    let extractor = ChangeListExtractor::from_config(config);
    let Some(changed) = extractor.extract(change_file)? else {
        return Ok(None);
    };
    log::debug!("{changed}");
    Ok(Some(changed.joined()))
}
