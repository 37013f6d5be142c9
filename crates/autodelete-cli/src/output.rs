//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use autodelete_domain::{Severity, SweepStatus};
use autodelete_sweeper::{SweepMetrics, SweepReport};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the report of one task.
    pub fn format_report(&self, task: &str, report: &SweepReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(task, report),
            OutputFormat::Table => Ok(self.format_report_table(task, report)),
            OutputFormat::Quiet => Ok(self.format_report_quiet(report)),
        }
    }

    /// Format a report as JSON.
    fn format_report_json(&self, task: &str, report: &SweepReport) -> Result<String> {
        let log: Vec<serde_json::Value> = report
            .log
            .iter()
            .map(|e| {
                serde_json::json!({
                    "severity": e.severity.as_str(),
                    "message": e.message,
                })
            })
            .collect();

        let value = serde_json::json!({
            "task": task,
            "run_id": report.run_id.to_string(),
            "status": report.status.as_str(),
            "code": report.status.code(),
            "folder": report.folder.as_ref().map(|p| p.display().to_string()),
            "threshold_secs": report.threshold.map(|t| t.as_secs()),
            "dry_run": report.dry_run,
            "deleted": report
                .deleted
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
            "kept": report.kept,
            "log": log,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format a report as a status line followed by a log table.
    fn format_report_table(&self, task: &str, report: &SweepReport) -> String {
        let mut header = format!("{}: {}", task, self.status(report.status));
        if report.dry_run {
            header.push_str(" (dry run)");
        }

        if report.log.is_empty() {
            return header;
        }

        let mut builder = Builder::default();
        builder.push_record(["Severity", "Message"]);
        for entry in &report.log {
            builder.push_record([self.severity(entry.severity), entry.message.clone()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!(
            "{}\n{}\n{} deleted, {} kept",
            header,
            table,
            report.deleted_count(),
            report.kept
        )
    }

    /// Format a report in quiet mode (deleted paths only).
    fn format_report_quiet(&self, report: &SweepReport) -> String {
        report
            .deleted
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format worker metrics.
    pub fn format_metrics(&self, metrics: &SweepMetrics) -> String {
        match self.format {
            OutputFormat::Quiet => String::new(),
            _ => metrics.summary(),
        }
    }

    /// Format a sweep status.
    pub fn status(&self, status: SweepStatus) -> String {
        let color = match status {
            SweepStatus::Ok => "green",
            SweepStatus::NoRun => "yellow",
            SweepStatus::Failure => "red",
        };
        self.colorize(status.as_str(), color)
    }

    /// Format a log severity.
    pub fn severity(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::Info => "blue",
            Severity::Warning => "yellow",
            Severity::Error => "red",
        };
        self.colorize(severity.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodelete_domain::{SweepConfig, TimeUnit};
    use autodelete_sweeper::{LocalFileSystem, Sweeper};
    use std::fs::File;
    use tempfile::TempDir;

    // Sweep with a far-future clock so the one file qualifies
    fn create_test_report() -> (TempDir, SweepReport) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("tmp")).unwrap();
        File::create(dir.path().join("tmp").join("old.txt")).unwrap();

        let config = SweepConfig::new(dir.path(), "tmp", 1, TimeUnit::Minutes).with_dry_run(true);
        let now = autodelete_sweeper::current_timestamp() + 3_600;
        let report = Sweeper::new(config)
            .sweep(&mut LocalFileSystem::new(), now)
            .unwrap();
        (dir, report)
    }

    #[test]
    fn test_json_format() {
        let (_dir, report) = create_test_report();
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report("tmp", &report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["task"], "tmp");
        assert_eq!(value["status"], "ok");
        assert_eq!(value["code"], 0);
        assert_eq!(value["threshold_secs"], 60);
        assert_eq!(value["deleted"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_table_format() {
        let (_dir, report) = create_test_report();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report("tmp", &report).unwrap();

        assert!(output.starts_with("tmp: ok (dry run)"));
        assert!(output.contains("Severity"));
        assert!(output.contains("Would delete file"));
        assert!(output.contains("1 deleted, 0 kept"));
    }

    #[test]
    fn test_quiet_format() {
        let (_dir, report) = create_test_report();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_report("tmp", &report).unwrap();

        assert!(output.ends_with("old.txt"));
        assert!(!output.contains("Severity"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.status(SweepStatus::NoRun), "no_run");
    }
}
