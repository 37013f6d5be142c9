//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub async fn execute_config(args: ConfigArgs, path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(path),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Init { force } => init_config(path, force, formatter),
    }
}

/// Print the loaded configuration.
fn show_config(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the sample configuration.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::sample().save(path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote sample configuration to {}", path.display()))
    );
    Ok(())
}
