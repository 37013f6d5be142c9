//! Background worker running every configured task on a schedule

use crate::{current_timestamp, SweepError, SweepMetrics, SweepReport, Sweeper, TaskConfig, WorkerConfig};
use autodelete_domain::traits::FileSystem;
use std::time::Instant;
use tokio::time::{interval, Duration};

/// Result of running one task during a cycle
#[derive(Debug)]
pub struct TaskOutcome {
    /// Task name
    pub task: String,

    /// Report, or the unexpected error that ended the sweep
    pub result: Result<SweepReport, SweepError>,
}

/// Background worker that sweeps every task at a fixed interval
///
/// Stands in for the CMS task scheduler: it invokes each sweep, forwards the
/// sweep's log to `tracing`, and relies on the next tick to retry failures.
///
/// # Examples
///
/// ```no_run
/// use autodelete_sweeper::{LocalFileSystem, SweepWorker, WorkerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut worker = SweepWorker::new(WorkerConfig::default());
///
///     // Run indefinitely (until Ctrl+C)
///     worker.run(LocalFileSystem::new()).await?;
///     Ok(())
/// }
/// ```
pub struct SweepWorker {
    config: WorkerConfig,
    metrics: SweepMetrics,
    interval: Duration,
}

impl SweepWorker {
    /// Create a new background worker with the given configuration
    pub fn new(config: WorkerConfig) -> Self {
        let interval = config.sweep_interval();
        Self {
            config,
            metrics: SweepMetrics::new(),
            interval,
        }
    }

    /// Get the worker configuration
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Sweep a single task now and record its outcome
    pub fn run_task<F>(&mut self, fs: &mut F, task: &TaskConfig) -> Result<SweepReport, SweepError>
    where
        F: FileSystem,
        F::Error: std::fmt::Display,
    {
        let sweeper = Sweeper::new(self.config.sweep_config(task));

        match sweeper.sweep(fs, current_timestamp()) {
            Ok(report) => {
                report.emit(&task.name);
                self.metrics.record_report(&report);
                Ok(report)
            }
            Err(e) => {
                tracing::error!(task = %task.name, "Sweep failed: {}", e);
                self.metrics.record_error();
                Err(e)
            }
        }
    }

    /// Run every configured task once, in order
    pub fn run_once<F>(&mut self, fs: &mut F) -> Vec<TaskOutcome>
    where
        F: FileSystem,
        F::Error: std::fmt::Display,
    {
        let start = Instant::now();
        let tasks = self.config.tasks.clone();

        if tasks.is_empty() {
            tracing::warn!("No tasks configured");
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        for task in &tasks {
            let result = self.run_task(fs, task);
            outcomes.push(TaskOutcome {
                task: task.name.clone(),
                result,
            });
        }

        self.metrics.record_cycle(start.elapsed());
        outcomes
    }

    /// Run the worker indefinitely
    ///
    /// Sweeps every task at the configured interval until a shutdown signal
    /// (Ctrl+C) is received. Unexpected sweep errors are logged and the
    /// worker keeps going.
    pub async fn run<F>(&mut self, mut fs: F) -> Result<(), SweepError>
    where
        F: FileSystem,
        F::Error: std::fmt::Display,
    {
        let mut ticker = interval(self.interval);

        tracing::info!(
            "Sweep worker started ({} tasks, interval: {:?})",
            self.config.tasks.len(),
            self.interval
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    tracing::debug!("Starting sweep cycle");
                    self.run_once(&mut fs);
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutdown signal received, stopping sweep worker");
                    break;
                }
            }
        }

        tracing::info!("Sweep worker stopped. Final metrics:\n{}", self.metrics.summary());

        Ok(())
    }

    /// Run for a specific number of cycles
    ///
    /// Returns the first unexpected sweep error, after the cycle it occurred in
    /// has finished.
    pub async fn run_cycles<F>(&mut self, mut fs: F, cycles: usize) -> Result<(), SweepError>
    where
        F: FileSystem,
        F::Error: std::fmt::Display,
    {
        let mut ticker = interval(self.interval);

        tracing::info!(
            "Sweep worker started for {} cycles (interval: {:?})",
            cycles,
            self.interval
        );

        for cycle in 0..cycles {
            ticker.tick().await;
            tracing::debug!("Starting sweep cycle {}/{}", cycle + 1, cycles);

            let outcomes = self.run_once(&mut fs);
            if let Some(e) = outcomes.into_iter().find_map(|o| o.result.err()) {
                tracing::error!("Sweep cycle {}/{} failed: {}", cycle + 1, cycles, e);
                return Err(e);
            }
        }

        tracing::info!(
            "Sweep worker finished {} cycles. Final metrics:\n{}",
            cycles,
            self.metrics.summary()
        );

        Ok(())
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &SweepMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}
