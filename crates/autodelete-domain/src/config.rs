//! Sweep configuration

use crate::{Threshold, TimeUnit};
use std::path::PathBuf;

/// Everything one sweep needs to know
///
/// # Examples
///
/// ```
/// use autodelete_domain::{SweepConfig, TimeUnit};
///
/// let config = SweepConfig::new("/app", "uploads/temp", 2, TimeUnit::Days);
/// assert_eq!(config.threshold().as_secs(), 172_800);
/// assert!(!config.dry_run);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Boundary every target folder must resolve under
    pub root_directory: PathBuf,

    /// Folder to sweep, relative to the root (a leading separator does not escape it)
    pub target_folder: String,

    /// Threshold magnitude
    pub threshold_value: u64,

    /// Threshold unit
    pub threshold_unit: TimeUnit,

    /// Report deletions without performing them
    pub dry_run: bool,
}

impl SweepConfig {
    /// Create a configuration with dry-run disabled
    pub fn new(
        root_directory: impl Into<PathBuf>,
        target_folder: impl Into<String>,
        threshold_value: u64,
        threshold_unit: TimeUnit,
    ) -> Self {
        Self {
            root_directory: root_directory.into(),
            target_folder: target_folder.into(),
            threshold_value,
            threshold_unit,
            dry_run: false,
        }
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Maximum file age derived from value and unit
    pub fn threshold(&self) -> Threshold {
        Threshold::new(self.threshold_value, self.threshold_unit)
    }
}
