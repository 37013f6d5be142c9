//! Sweep outcome and log vocabulary

use std::fmt;

/// Coarse outcome of a sweep, as understood by the task scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepStatus {
    /// Sweep completed, whether or not anything was deleted
    Ok,

    /// Sweep did nothing meaningful (empty config, outside the root, no files)
    NoRun,

    /// A deletion failed and the sweep was aborted
    Failure,
}

impl SweepStatus {
    /// Scheduler exit code for this status
    pub fn code(&self) -> i32 {
        match self {
            SweepStatus::Ok => 0,
            SweepStatus::NoRun => 3,
            SweepStatus::Failure => 5,
        }
    }

    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SweepStatus::Ok => "ok",
            SweepStatus::NoRun => "no_run",
            SweepStatus::Failure => "failure",
        }
    }

    /// Ordering used to pick the worst outcome of several sweeps
    pub fn severity_rank(&self) -> u8 {
        match self {
            SweepStatus::Ok => 0,
            SweepStatus::NoRun => 1,
            SweepStatus::Failure => 2,
        }
    }
}

impl fmt::Display for SweepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Normal progress
    Info,
    /// Sweep could not do its job, nothing was harmed
    Warning,
    /// A deletion failed
    Error,
}

impl Severity {
    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a sweep's task-run log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Severity of the line
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

impl LogEntry {
    /// Info line
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Warning line
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Error line
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}
