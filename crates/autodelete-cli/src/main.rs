//! Autodelete CLI - delete files older than a threshold from configured folders.

use autodelete_cli::commands;
use autodelete_cli::config::Settings;
use autodelete_cli::logging::init_logging;
use autodelete_cli::{Cli, Command, Config, Formatter};
use autodelete_domain::SweepStatus;
use clap::Parser;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(status) => std::process::exit(status.code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> autodelete_cli::Result<SweepStatus> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logging(cli.verbose, matches!(cli.command, Command::Watch(_)));

    let config_path = Config::path(cli.config.as_deref())?;

    // Ad-hoc sweeps and config management work without a loaded config
    let config = match &cli.command {
        Command::Run(_) | Command::Watch(_) => Some(Config::load(&config_path)?),
        Command::Sweep(_) | Command::Config(_) => None,
    };
    tracing::debug!(path = %config_path.display(), loaded = config.is_some(), "Configuration resolved");

    let settings = config
        .as_ref()
        .map(|c| c.settings.clone())
        .unwrap_or_else(Settings::default);

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match (cli.command, config) {
        (Command::Run(args), Some(config)) => commands::execute_run(args, config, &formatter).await,
        (Command::Watch(args), Some(config)) => {
            commands::execute_watch(args, config, &formatter).await?;
            Ok(SweepStatus::Ok)
        }
        (Command::Sweep(args), _) => commands::execute_sweep(args, &formatter).await,
        (Command::Config(args), _) => {
            commands::execute_config(args, &config_path, &formatter).await?;
            Ok(SweepStatus::Ok)
        }
        _ => unreachable!(),
    }
}
