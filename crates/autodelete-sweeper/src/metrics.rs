//! Metrics collection for sweep runs

use crate::SweepReport;
use autodelete_domain::SweepStatus;
use std::collections::HashMap;
use std::time::Duration;

/// Metrics collected across sweep cycles
///
/// Tracks outcomes per status, files deleted and kept, and unexpected errors.
#[derive(Debug, Clone, Default)]
pub struct SweepMetrics {
    /// Sweeps completed per status
    pub runs: HashMap<SweepStatus, usize>,

    /// Files deleted (or that would have been, in dry-run mode)
    pub deleted: usize,

    /// Files inspected and left in place
    pub kept: usize,

    /// Sweeps that ended in an unexpected error
    pub errors: usize,

    /// Worker cycles completed
    pub cycle_count: usize,

    /// Time spent sweeping, summed over cycles
    pub total_runtime: Duration,
}

impl SweepMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one sweep
    pub fn record_report(&mut self, report: &SweepReport) {
        *self.runs.entry(report.status).or_insert(0) += 1;
        self.deleted += report.deleted_count();
        self.kept += report.kept;
    }

    /// Record a sweep that returned an error
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Record a worker cycle completion and how long it took
    pub fn record_cycle(&mut self, elapsed: Duration) {
        self.cycle_count += 1;
        self.total_runtime += elapsed;
    }

    /// Sweeps with the given status
    pub fn runs_with(&self, status: SweepStatus) -> usize {
        self.runs.get(&status).copied().unwrap_or(0)
    }

    /// Total sweeps that produced a report
    pub fn total_runs(&self) -> usize {
        self.runs.values().sum()
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let lines = [
            "Sweep Metrics Summary".to_string(),
            "=====================".to_string(),
            format!("Cycles: {}", self.cycle_count),
            format!("Total runtime: {:.3}s", self.total_runtime.as_secs_f64()),
            String::new(),
            format!(
                "Runs: {} ok, {} no-run, {} failed, {} errors",
                self.runs_with(SweepStatus::Ok),
                self.runs_with(SweepStatus::NoRun),
                self.runs_with(SweepStatus::Failure),
                self.errors
            ),
            format!("Files deleted: {}", self.deleted),
            format!("Files kept: {}", self.kept),
        ];

        lines.join("\n")
    }
}
