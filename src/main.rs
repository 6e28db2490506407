use clap::Parser;
use tracing::{error, info};

use galpao::adapter::inbound::cli::command::{CheckCommand, Cli, Commands, ConfigCommand};
use galpao::adapter::inbound::cli::output::{self, OutputConfig};
use galpao::adapter::inbound::cli::{check, config, run};
use galpao::error::Result;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    output::configure(
        OutputConfig::new(cli.json, cli.quiet, cli.verbose),
        &cli.color,
    );

    if let Err(e) = dispatch(cli) {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let (mut config, source) = config::load(cli.config.as_deref())?;
    config.logging.apply_verbosity(cli.quiet, cli.verbose);
    config.init_logging();
    info!(source = %source, "galpao starting");

    match cli.command {
        None => run::execute(config, &Default::default()),
        Some(Commands::Run(args)) => run::execute(config, &args),
        Some(Commands::Check(CheckCommand::Config)) => check::execute_config(&config, &source),
        Some(Commands::Check(CheckCommand::Connection(args))) => {
            check::execute_connection(config, &args)
        }
        Some(Commands::Config(ConfigCommand::Show)) => config::execute_show(&config, &source),
    }
}
