//! CLI command definitions and argument parsing.

use autodelete_domain::TimeUnit;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Autodelete - delete files older than a threshold from configured folders.
#[derive(Debug, Parser)]
#[command(name = "autodelete")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "AUTODELETE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (deleted paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the configured tasks once
    Run(RunArgs),

    /// Sweep a single folder without a config file
    Sweep(SweepArgs),

    /// Run the configured tasks on their interval until Ctrl+C
    Watch(WatchArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Only run the task with this name
    #[arg(short, long)]
    pub task: Option<String>,

    /// Report what would be deleted without deleting
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the sweep command.
#[derive(Debug, Parser)]
pub struct SweepArgs {
    /// Root directory the folder must stay within
    #[arg(short, long)]
    pub root: PathBuf,

    /// Folder to sweep, relative to the root
    #[arg(long)]
    pub folder: String,

    /// Delete files older than this many units
    #[arg(short, long)]
    pub older_than: u64,

    /// Unit of the threshold
    #[arg(short, long, value_enum, default_value = "days")]
    pub unit: UnitArg,

    /// Report what would be deleted without deleting
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the watch command.
#[derive(Debug, Parser)]
pub struct WatchArgs {
    /// Stop after this many cycles instead of running until Ctrl+C
    #[arg(long)]
    pub cycles: Option<usize>,
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the loaded configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a sample configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Threshold unit argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum UnitArg {
    /// Minutes
    Minutes,
    /// Hours
    Hours,
    /// Days
    Days,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<UnitArg> for TimeUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Minutes => TimeUnit::Minutes,
            UnitArg::Hours => TimeUnit::Hours,
            UnitArg::Days => TimeUnit::Days,
        }
    }
}
