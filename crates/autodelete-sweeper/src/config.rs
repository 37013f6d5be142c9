//! Configuration for scheduled sweeps
//!
//! Defines the root boundary, the sweep interval, and the task list.

use crate::params::deserialize_older_than;
use crate::TaskParams;
use autodelete_domain::{SweepConfig, TimeUnit};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the sweep worker
///
/// # Examples
///
/// ```
/// use autodelete_sweeper::WorkerConfig;
///
/// let config = WorkerConfig::default();
/// assert_eq!(config.interval_minutes, 60);
/// assert!(config.tasks.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Boundary all task folders must resolve under
    pub root_directory: PathBuf,

    /// How often to run every task (in minutes)
    /// Default: 60
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,

    /// Dry-run mode: log what would be deleted without deleting
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,

    /// Scheduled tasks
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

/// One scheduled autodelete task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskConfig {
    /// Task name, used in logs and to select a task from the CLI
    pub name: String,

    /// Folder to sweep, relative to the root directory
    pub folder_path: String,

    /// Threshold magnitude; numeric strings are accepted and negatives clamp to 0
    #[serde(default, deserialize_with = "deserialize_older_than")]
    pub older_than: u64,

    /// `minutes`, `hours`, or anything else for days
    #[serde(default = "default_time_unit")]
    pub time_unit: String,
}

fn default_interval_minutes() -> u64 {
    60
}

fn default_time_unit() -> String {
    TimeUnit::Days.as_str().to_string()
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            root_directory: PathBuf::from("/var/www"),
            interval_minutes: default_interval_minutes(),
            dry_run: false,
            tasks: Vec::new(),
        }
    }
}

impl WorkerConfig {
    /// Get sweep interval as Duration (never shorter than one minute)
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.max(1) * 60)
    }

    /// Look up a task by name
    pub fn task(&self, name: &str) -> Option<&TaskConfig> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Sweep configuration for one task
    pub fn sweep_config(&self, task: &TaskConfig) -> SweepConfig {
        TaskParams {
            folder_path: task.folder_path.clone(),
            older_than: task.older_than,
            time_unit: TimeUnit::from_param(&task.time_unit),
        }
        .into_config(&self.root_directory)
        .with_dry_run(self.dry_run)
    }
}
