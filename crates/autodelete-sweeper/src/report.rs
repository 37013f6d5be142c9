//! Result of a single sweep

use autodelete_domain::{LogEntry, RunId, Severity, SweepStatus, Threshold};
use std::path::PathBuf;

/// Outcome of one sweep: status, the ordered task-run log, and what was removed
#[derive(Debug, Clone)]
pub struct SweepReport {
    /// Identifier of this run
    pub run_id: RunId,

    /// Coarse outcome
    pub status: SweepStatus,

    /// Ordered log lines, oldest first
    pub log: Vec<LogEntry>,

    /// Canonical folder that was swept, once resolved
    pub folder: Option<PathBuf>,

    /// Threshold in effect, once computed
    pub threshold: Option<Threshold>,

    /// Files deleted (or, in dry-run mode, that would have been)
    pub deleted: Vec<PathBuf>,

    /// Files inspected and left in place
    pub kept: usize,

    /// Whether deletions were only simulated
    pub dry_run: bool,
}

impl SweepReport {
    pub(crate) fn new(dry_run: bool) -> Self {
        Self {
            run_id: RunId::new(),
            status: SweepStatus::Ok,
            log: Vec::new(),
            folder: None,
            threshold: None,
            deleted: Vec::new(),
            kept: 0,
            dry_run,
        }
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.log.push(entry);
    }

    pub(crate) fn finish(mut self, status: SweepStatus) -> Self {
        self.status = status;
        self
    }

    /// Number of files deleted
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    /// Log lines with the given severity
    pub fn entries(&self, severity: Severity) -> impl Iterator<Item = &LogEntry> {
        self.log.iter().filter(move |e| e.severity == severity)
    }

    /// Forward the log to `tracing`, tagged with the task name and run id
    pub fn emit(&self, task: &str) {
        for entry in &self.log {
            match entry.severity {
                Severity::Info => {
                    tracing::info!(task, run_id = %self.run_id, "{}", entry.message)
                }
                Severity::Warning => {
                    tracing::warn!(task, run_id = %self.run_id, "{}", entry.message)
                }
                Severity::Error => {
                    tracing::error!(task, run_id = %self.run_id, "{}", entry.message)
                }
            }
        }
        tracing::debug!(
            task,
            run_id = %self.run_id,
            status = %self.status,
            deleted = self.deleted.len(),
            kept = self.kept,
            "Sweep finished"
        );
    }
}
