//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use autodelete_sweeper::{TaskConfig, WorkerConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration: the worker settings plus presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory, interval, dry-run flag and tasks
    #[serde(flatten)]
    pub worker: WorkerConfig,

    /// Output settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Default configuration file path: `~/.autodelete/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".autodelete").join("config.toml"))
    }

    /// Resolve the configuration path, preferring an explicit override.
    pub fn path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Config file {} not found. Run 'autodelete config init' to create one.",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Sample configuration written by `config init`.
    pub fn sample() -> Self {
        Self {
            worker: WorkerConfig {
                tasks: vec![TaskConfig {
                    name: "tmp-uploads".to_string(),
                    folder_path: "uploads/temp".to_string(),
                    older_than: 2,
                    time_unit: "days".to_string(),
                }],
                ..WorkerConfig::default()
            },
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config() {
        let config = Config::sample();
        assert_eq!(config.worker.tasks.len(), 1);
        assert_eq!(config.worker.interval_minutes, 60);
        assert!(config.settings.color);
    }

    #[test]
    fn test_parse_file_layout() {
        let config: Config = toml::from_str(
            r#"
            root_directory = "/srv/site"
            interval_minutes = 5

            [settings]
            format = "json"

            [[tasks]]
            name = "logs"
            folder_path = "logs"
            older_than = "12"
            time_unit = "hours"
            "#,
        )
        .unwrap();

        assert_eq!(config.worker.root_directory, PathBuf::from("/srv/site"));
        assert_eq!(config.worker.interval_minutes, 5);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.worker.tasks[0].older_than, 12);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::sample().save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded.worker.tasks, Config::sample().worker.tasks);
        assert_eq!(loaded.worker.root_directory, PathBuf::from("/var/www"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Config::path(Some(Path::new("/etc/autodelete.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/etc/autodelete.toml"));
    }
}
